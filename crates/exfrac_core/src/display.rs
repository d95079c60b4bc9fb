//! Textual forms: plain reduced display and mixed-number rendering.

use std::fmt;

use num_integer::Integer;
use num_traits::{Signed, Zero};

use crate::fraction::Fraction;

impl fmt::Display for Fraction {
    /// `"{num}/{den}"`, or just `"{num}"` for integer values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "{}/{}", self.numer(), self.denom())
        }
    }
}

impl Fraction {
    /// Mixed-number form: `5/2` renders as `"2 + 1/2"`, `-7/2` as
    /// `"-4 - 1/2"`. Proper fractions render as plain [`Display`].
    ///
    /// Floor division with a non-negative remainder, not truncation; the
    /// two disagree for negative numerators and only the floor form puts
    /// the fractional part on the correct side of the sign.
    ///
    /// [`Display`]: std::fmt::Display
    pub fn to_mixed_number(&self) -> String {
        if self.is_proper() {
            return self.to_string();
        }
        let (quotient, remainder) = self.numer().div_mod_floor(self.denom());
        if remainder.is_zero() {
            return quotient.to_string();
        }
        if self.numer().is_negative() {
            format!("{} - {}/{}", quotient, remainder, self.denom())
        } else {
            format!("{} + {}/{}", quotient, remainder, self.denom())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).expect("valid test fraction")
    }

    #[test]
    fn display_reduced_forms() {
        assert_eq!(frac(1, 2).to_string(), "1/2");
        assert_eq!(frac(-1, 2).to_string(), "-1/2");
        assert_eq!(frac(4, 1).to_string(), "4");
        assert_eq!(frac(0, 5).to_string(), "0");
    }

    #[test]
    fn mixed_number_positive() {
        assert_eq!(frac(5, 2).to_mixed_number(), "2 + 1/2");
        assert_eq!(frac(3, 2).to_mixed_number(), "1 + 1/2");
    }

    #[test]
    fn mixed_number_negative_uses_floor_quotient() {
        assert_eq!(frac(-7, 2).to_mixed_number(), "-4 - 1/2");
    }

    #[test]
    fn mixed_number_integers_and_proper() {
        assert_eq!(frac(2, 1).to_mixed_number(), "2");
        assert_eq!(frac(3, 3).to_mixed_number(), "1");
        assert_eq!(frac(1, 2).to_mixed_number(), "1/2");
        assert_eq!(frac(-1, 2).to_mixed_number(), "-1/2");
    }
}
