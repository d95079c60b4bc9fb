//! Right-hand operand coercion for binary fraction operations.

use num_bigint::BigInt;

use crate::error::FractionError;
use crate::fraction::Fraction;

/// A binary-operation operand: either a fraction or a plain integer.
///
/// Integer types coerce infallibly (`n` is treated as `n/1`). Floating-point
/// values are rejected with [`FractionError::TypeMismatch`] even when they
/// hold an integral value; there is no implicit numeric promotion.
#[derive(Debug, Clone)]
pub enum Operand {
    Fraction(Fraction),
    Int(BigInt),
}

impl Operand {
    /// Collapse the operand into a fraction.
    pub(crate) fn into_fraction(self) -> Fraction {
        match self {
            Operand::Fraction(f) => f,
            Operand::Int(n) => Fraction::from_integer(n),
        }
    }
}

impl From<Fraction> for Operand {
    fn from(f: Fraction) -> Self {
        Operand::Fraction(f)
    }
}

impl From<&Fraction> for Operand {
    fn from(f: &Fraction) -> Self {
        Operand::Fraction(f.clone())
    }
}

impl From<BigInt> for Operand {
    fn from(n: BigInt) -> Self {
        Operand::Int(n)
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(BigInt::from(n))
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Int(BigInt::from(n))
    }
}

impl TryFrom<f64> for Operand {
    type Error = FractionError;

    fn try_from(_: f64) -> Result<Self, Self::Error> {
        Err(FractionError::TypeMismatch { found: "float" })
    }
}

impl TryFrom<f32> for Operand {
    type Error = FractionError;

    fn try_from(_: f32) -> Result<Self, Self::Error> {
        Err(FractionError::TypeMismatch { found: "float" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_operands_coerce() {
        let op = Operand::from(3i64);
        assert_eq!(op.into_fraction(), Fraction::from_integer(3));
    }

    #[test]
    fn float_operands_are_rejected() {
        let err = Operand::try_from(0.5f64).unwrap_err();
        assert_eq!(err, FractionError::TypeMismatch { found: "float" });
        // Integral floats are still floats.
        assert!(Operand::try_from(2.0f64).is_err());
        assert!(Operand::try_from(2.0f32).is_err());
    }
}
