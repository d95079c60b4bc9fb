//! Greatest-common-divisor helper shared by fraction reduction.

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Non-negative gcd of two integers, with `gcd(0, n) = |n|`.
///
/// Iterative Euclidean algorithm. Either argument may be zero or negative;
/// the sign of the inputs never reaches the result.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}
