//! Conversions between [`Rational`] and `dashu`'s arbitrary precision
//! rationals.
//!
//! Going to `RBig` is always lossless; coming back fails when either part
//! exceeds 64 bits.

use dashu::integer::{IBig, UBig};
use dashu::rational::RBig;

use crate::error::ArithmeticError;
use crate::Rational;

impl From<Rational> for RBig {
    fn from(r: Rational) -> Self {
        RBig::from_parts(
            IBig::from(r.numerator()),
            UBig::from(r.denominator().unsigned_abs()),
        )
    }
}

impl TryFrom<&RBig> for Rational {
    type Error = ArithmeticError;

    fn try_from(value: &RBig) -> Result<Self, Self::Error> {
        let numerator =
            i64::try_from(value.numerator().clone()).map_err(|_| ArithmeticError::Overflow)?;
        let denominator = u64::try_from(value.denominator().clone())
            .ok()
            .and_then(|d| i64::try_from(d).ok())
            .ok_or(ArithmeticError::Overflow)?;
        Rational::new(numerator, denominator)
    }
}

impl TryFrom<RBig> for Rational {
    type Error = ArithmeticError;

    fn try_from(value: RBig) -> Result<Self, Self::Error> {
        Rational::try_from(&value)
    }
}
