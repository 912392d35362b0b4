//! # Error Taxonomy
//!
//! Every fallible operation in the crate reports one of these variants.
//! Arithmetic on values that cannot fail (addition, multiplication, negation)
//! returns plain values; the `Div`/`Rem` operators panic on a zero divisor
//! like the primitive integer types do, with `checked_*` counterparts for
//! callers that propagate instead.

use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The input string is not a valid decimal literal.
    #[error("invalid decimal literal: {0:?}")]
    InvalidLiteral(String),

    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// Rational construction with a zero denominator.
    #[error("denominator is zero")]
    InvalidDenominator,

    /// Natural-number subtraction whose result would be negative.
    #[error("result would be negative")]
    NegativeResult,
}
