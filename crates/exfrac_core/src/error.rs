//! Error types for exfrac_core.

use thiserror::Error;

/// Errors reported by fraction construction and arithmetic.
///
/// The set is closed: callers match on the exact kind, there is no broader
/// "any fraction error" category to catch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// Denominator argument is zero, or an operation's intermediate
    /// denominator would be (a zero fraction raised to a negative power).
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    /// Divide operator invoked with a zero-valued right-hand operand.
    #[error("division by zero")]
    DivisionByZero,

    /// Operand or exponent is not an integer (or fraction) where one is
    /// required.
    #[error("expected an integer or fraction operand, got {found}")]
    TypeMismatch { found: &'static str },
}
