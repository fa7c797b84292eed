//! Modular arithmetic.
//!
//! This module provides residue classes with a runtime modulus, used for
//! congruence normalization and ring-buffer style index wrap-around.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::error::ZeroDivisor;
use crate::number_theory::{
    divide_mod, inverse_mod, modulo, modulo_wide, narrow_reduced, power_mod,
};

/// The residue class of an integer modulo a non-zero modulus.
///
/// The value is kept normalized by [`modulo`], so it has the sign of the
/// modulus. Binary operations require both operands to share a modulus.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Residue {
    value: i64,
    modulus: i64,
}

impl Residue {
    /// Creates the residue of `value` modulo `modulus`.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDivisor`] if the modulus is zero.
    pub fn new(value: i64, modulus: i64) -> Result<Self, ZeroDivisor> {
        if modulus == 0 {
            return Err(ZeroDivisor { value, modulus });
        }
        Ok(Self {
            value: modulo(value, modulus),
            modulus,
        })
    }

    /// Returns the normalized value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.value
    }

    /// Returns the modulus.
    #[must_use]
    pub const fn modulus(self) -> i64 {
        self.modulus
    }

    /// Returns true if this is the zero class.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.value == 0
    }

    /// Computes the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDivisor`] if the value is not coprime to the modulus.
    pub fn inverse(self) -> Result<Self, ZeroDivisor> {
        let value = inverse_mod(self.value, self.modulus)?;
        Ok(self.with_value(value))
    }

    /// Computes `self^exp`; negative exponents go through the inverse.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDivisor`] if `exp < 0` and the value is not invertible.
    pub fn pow(self, exp: i64) -> Result<Self, ZeroDivisor> {
        let value = power_mod(self.value, exp, self.modulus)?;
        // power_mod returns 1 for exp == 0 even when |modulus| == 1.
        Ok(self.with_value(modulo(value, self.modulus)))
    }

    /// Computes `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ZeroDivisor`] if `rhs` is not invertible.
    ///
    /// # Panics
    ///
    /// Panics if the moduli differ.
    pub fn checked_div(self, rhs: Self) -> Result<Self, ZeroDivisor> {
        self.assert_same_modulus(rhs);
        let value = divide_mod(self.value, rhs.value, self.modulus)?;
        Ok(self.with_value(value))
    }

    const fn with_value(self, value: i64) -> Self {
        Self {
            value,
            modulus: self.modulus,
        }
    }

    fn wide_op(self, rhs: Self, op: impl Fn(i128, i128) -> i128) -> Self {
        self.assert_same_modulus(rhs);
        let value = modulo_wide(
            op(i128::from(self.value), i128::from(rhs.value)),
            i128::from(self.modulus),
        );
        self.with_value(narrow_reduced(value))
    }

    fn assert_same_modulus(self, rhs: Self) {
        assert_eq!(self.modulus, rhs.modulus, "residues must share a modulus");
    }
}

impl fmt::Debug for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.modulus)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Add for Residue {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.wide_op(rhs, |a, b| a + b)
    }
}

impl Sub for Residue {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.wide_op(rhs, |a, b| a - b)
    }
}

impl Mul for Residue {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.wide_op(rhs, |a, b| a * b)
    }
}

impl Neg for Residue {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let value = modulo_wide(-i128::from(self.value), i128::from(self.modulus));
        self.with_value(narrow_reduced(value))
    }
}
