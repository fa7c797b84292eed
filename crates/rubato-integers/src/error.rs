//! Error types for the arithmetic kernel.

use thiserror::Error;

/// No multiplicative inverse exists for `value` modulo `modulus`.
///
/// Raised by [`inverse_mod`](crate::number_theory::inverse_mod),
/// [`divide_mod`](crate::number_theory::divide_mod) and
/// [`power_mod`](crate::number_theory::power_mod) with a negative exponent.
/// A zero modulus is reported the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("{value} is not invertible modulo {modulus}")]
pub struct ZeroDivisor {
    /// The element that has no inverse.
    pub value: i64,
    /// The modulus it was inverted against.
    pub modulus: i64,
}

impl ZeroDivisor {
    pub(crate) const fn new(value: i64, modulus: i64) -> Self {
        Self { value, modulus }
    }
}

/// Errors raised by [`Rational`](crate::Rational) arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// A zero denominator, a zero divisor, or the inverse of zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The reduced result does not fit in 64-bit numerator and denominator.
    #[error("rational result overflows 64-bit numerator or denominator")]
    Overflow,

    /// A NaN or infinite float was quantized.
    #[error("cannot quantize a non-finite floating-point value")]
    NotFinite,
}

/// Errors raised while parsing the `<int>` / `<int>/<int>` text form.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The input was empty or only whitespace.
    #[error("cannot parse rational from empty string")]
    Empty,

    /// A numerator or denominator was not an optionally negated digit string.
    #[error("invalid integer literal `{0}`")]
    InvalidInteger(String),

    /// More than one `/`, or nothing after the `/`.
    #[error("malformed fraction, expected `<int>` or `<int>/<int>`")]
    Malformed,

    /// The denominator was zero.
    #[error("denominator is zero")]
    ZeroDenominator,

    /// A part, or the reduced value, does not fit in 64 bits.
    #[error("rational literal out of range")]
    OutOfRange,
}
