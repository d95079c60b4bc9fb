//! The `Fraction` value type: canonical reduced form and exact arithmetic.

use std::ops::{Add, Div, Mul, Sub};

use num_bigint::BigInt;
use num_traits::{One, Pow, Signed, ToPrimitive, Zero};
use tracing::trace;

use crate::error::FractionError;
use crate::gcd::gcd;
use crate::operand::Operand;

/// An exact rational number in canonical reduced form.
///
/// Invariants for every live value: the denominator is positive, the sign
/// lives on the numerator, and the two parts are coprime (the zero value is
/// exactly `0/1`). Values are immutable; every operation returns a new
/// `Fraction`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fraction {
    num: BigInt,
    den: BigInt,
}

impl Fraction {
    /// Build the canonical reduced fraction `num/den`.
    ///
    /// The sign is normalized into the numerator and both parts are divided
    /// by their gcd. A zero numerator canonicalizes to `0/1` whatever the
    /// input denominator was.
    ///
    /// Returns [`FractionError::ZeroDenominator`] when `den` is zero.
    pub fn new(num: impl Into<BigInt>, den: impl Into<BigInt>) -> Result<Self, FractionError> {
        let den = den.into();
        if den.is_zero() {
            return Err(FractionError::ZeroDenominator);
        }
        Ok(Self::canonical(num.into(), den))
    }

    /// The integer `n` as the fraction `n/1`.
    pub fn from_integer(n: impl Into<BigInt>) -> Self {
        Self {
            num: n.into(),
            den: BigInt::one(),
        }
    }

    // Sole producer of the canonical form. `den` must be non-zero.
    fn canonical(num: BigInt, den: BigInt) -> Self {
        if num.is_zero() {
            return Self {
                num,
                den: BigInt::one(),
            };
        }
        let d = gcd(&num, &den);
        let mut reduced_num = &num / &d;
        if den.is_negative() {
            reduced_num = -reduced_num;
        }
        let reduced_den = den.abs() / d;
        trace!(num = %reduced_num, den = %reduced_den, "canonicalized fraction");
        Self {
            num: reduced_num,
            den: reduced_den,
        }
    }

    /// Numerator of the reduced form; carries the sign.
    pub fn numer(&self) -> &BigInt {
        &self.num
    }

    /// Denominator of the reduced form; always positive.
    pub fn denom(&self) -> &BigInt {
        &self.den
    }

    /// `self + rhs`, reduced. The right-hand side may be a fraction or a
    /// plain integer.
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_fraction();
        Self::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }

    /// `self - rhs`, reduced.
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_fraction();
        Self::new(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }

    /// `self * rhs`, reduced.
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_fraction();
        Self::new(&self.num * &rhs.num, &self.den * &rhs.den)
    }

    /// `self / rhs`, reduced.
    ///
    /// Returns [`FractionError::DivisionByZero`] when `rhs` is zero-valued.
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> Result<Self, FractionError> {
        let rhs = rhs.into().into_fraction();
        if rhs.is_zero() {
            return Err(FractionError::DivisionByZero);
        }
        Self::new(&self.num * &rhs.den, &self.den * &rhs.num)
    }

    /// `self` raised to an integer exponent, reduced.
    ///
    /// A negative exponent inverts the base before raising, so the zero
    /// fraction to a negative power reports
    /// [`FractionError::ZeroDenominator`] from the inverted base. A
    /// `Fraction` exponent is a [`FractionError::TypeMismatch`] even when
    /// its value is integral.
    pub fn checked_pow(&self, exp: impl Into<Operand>) -> Result<Self, FractionError> {
        let exp = match exp.into() {
            Operand::Int(n) => n,
            Operand::Fraction(_) => {
                return Err(FractionError::TypeMismatch {
                    found: "fraction exponent",
                })
            }
        };
        let mag = exp.magnitude();
        if exp.is_negative() {
            Self::new(Pow::pow(&self.den, mag), Pow::pow(&self.num, mag))
        } else {
            Self::new(Pow::pow(&self.num, mag), Pow::pow(&self.den, mag))
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            num: self.num.abs(),
            den: self.den.clone(),
        }
    }

    /// Decimal value of the fraction.
    pub fn to_f64(&self) -> f64 {
        let num = self.num.to_f64().unwrap_or(f64::NAN);
        let den = self.den.to_f64().unwrap_or(f64::NAN);
        num / den
    }

    /// True when the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.num.is_zero()
    }

    /// True when the reduced denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    /// True when `|self| < 1`.
    pub fn is_proper(&self) -> bool {
        self.num.abs() < self.den
    }

    /// True when the reduced numerator is 1 or -1.
    pub fn is_unit(&self) -> bool {
        self.num.abs().is_one()
    }

    /// True when `self` and `rhs` differ by a unit fraction.
    pub fn is_adjacent_to(&self, rhs: impl Into<Operand>) -> bool {
        self.checked_sub(rhs)
            .map(|diff| diff.abs().is_unit())
            .unwrap_or(false)
    }
}

impl Default for Fraction {
    /// The canonical zero, `0/1`.
    fn default() -> Self {
        Self::from_integer(0)
    }
}

impl From<i32> for Fraction {
    fn from(n: i32) -> Self {
        Self::from_integer(n)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<BigInt> for Fraction {
    fn from(n: BigInt) -> Self {
        Self::from_integer(n)
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    /// Floats never construct a fraction, integral or not.
    fn try_from(_: f64) -> Result<Self, Self::Error> {
        Err(FractionError::TypeMismatch { found: "float" })
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        self.den.is_one() && self.num == BigInt::from(*other)
    }
}

impl PartialEq<Fraction> for i64 {
    fn eq(&self, other: &Fraction) -> bool {
        other == self
    }
}

impl PartialEq<BigInt> for Fraction {
    fn eq(&self, other: &BigInt) -> bool {
        self.den.is_one() && self.num == *other
    }
}

impl PartialEq<Fraction> for BigInt {
    fn eq(&self, other: &Fraction) -> bool {
        other == self
    }
}

// Operator parity for the checked methods. Add/Sub/Mul reduce through a
// product of positive denominators and cannot fail; Div panics on a zero
// divisor, like integer `/`.

impl Add for &Fraction {
    type Output = Fraction;

    fn add(self, rhs: &Fraction) -> Fraction {
        Fraction::canonical(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Add for Fraction {
    type Output = Fraction;

    fn add(self, rhs: Fraction) -> Fraction {
        &self + &rhs
    }
}

impl Sub for &Fraction {
    type Output = Fraction;

    fn sub(self, rhs: &Fraction) -> Fraction {
        Fraction::canonical(
            &self.num * &rhs.den - &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl Sub for Fraction {
    type Output = Fraction;

    fn sub(self, rhs: Fraction) -> Fraction {
        &self - &rhs
    }
}

impl Mul for &Fraction {
    type Output = Fraction;

    fn mul(self, rhs: &Fraction) -> Fraction {
        Fraction::canonical(&self.num * &rhs.num, &self.den * &rhs.den)
    }
}

impl Mul for Fraction {
    type Output = Fraction;

    fn mul(self, rhs: Fraction) -> Fraction {
        &self * &rhs
    }
}

impl Div for &Fraction {
    type Output = Fraction;

    /// # Panics
    ///
    /// Panics when `rhs` is zero-valued; use
    /// [`Fraction::checked_div`] for the fallible form.
    fn div(self, rhs: &Fraction) -> Fraction {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Div for Fraction {
    type Output = Fraction;

    /// # Panics
    ///
    /// Panics when `rhs` is zero-valued; use
    /// [`Fraction::checked_div`] for the fallible form.
    fn div(self, rhs: Fraction) -> Fraction {
        &self / &rhs
    }
}

impl Zero for Fraction {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Fraction {
    fn one() -> Self {
        Self::from_integer(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).expect("valid test fraction")
    }

    #[test]
    fn sign_normalizes_into_numerator() {
        let f = frac(1, -2);
        assert_eq!(f.numer(), &BigInt::from(-1));
        assert_eq!(f.denom(), &BigInt::from(2));
        assert_eq!(frac(-3, -6), frac(1, 2));
    }

    #[test]
    fn zero_canonicalizes_to_zero_over_one() {
        let f = frac(0, -7);
        assert_eq!(f.numer(), &BigInt::from(0));
        assert_eq!(f.denom(), &BigInt::from(1));
    }

    #[test]
    fn reduction_is_by_gcd() {
        let f = frac(2, 4);
        assert_eq!(f.numer(), &BigInt::from(1));
        assert_eq!(f.denom(), &BigInt::from(2));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(
            Fraction::new(1, 0).unwrap_err(),
            FractionError::ZeroDenominator
        );
    }

    #[test]
    fn negative_power_of_zero_reports_zero_denominator() {
        let zero = frac(0, 1);
        assert_eq!(
            zero.checked_pow(-1).unwrap_err(),
            FractionError::ZeroDenominator
        );
    }

    #[test]
    fn fraction_exponent_is_a_type_mismatch() {
        let err = frac(1, 2).checked_pow(frac(2, 1)).unwrap_err();
        assert!(matches!(err, FractionError::TypeMismatch { .. }));
    }

    #[test]
    fn operators_match_checked_methods() {
        let a = frac(1, 2);
        let b = frac(1, 3);
        assert_eq!(&a + &b, a.checked_add(&b).unwrap());
        assert_eq!(&a - &b, a.checked_sub(&b).unwrap());
        assert_eq!(&a * &b, a.checked_mul(&b).unwrap());
        assert_eq!(&a / &b, a.checked_div(&b).unwrap());
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = frac(1, 2) / frac(0, 1);
    }
}
