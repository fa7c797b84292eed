//! # rubato-integers
//!
//! Exact arithmetic kernel for Rubato Composer.
//!
//! This crate provides:
//! - Number theory primitives (`gcd`, `exgcd`, `inverse_mod`, `power_mod`, ...)
//! - Residue classes with a runtime modulus (`Residue`)
//! - Lowest-terms rationals with 64-bit parts (`Rational`)
//! - Float quantization against a bounded denominator (`Quantization`)
//! - Lossless conversion to `dashu` rationals
//!
//! ## Example
//!
//! ```
//! use rubato_integers::{number_theory, Rational};
//!
//! assert_eq!(number_theory::inverse_mod(1365, 187), Ok(177));
//!
//! let r: Rational = "60/-154".parse().unwrap();
//! assert_eq!(r.to_string(), "-30/77");
//! assert_eq!(Rational::quantize(47.125, 16), Rational::new(377, 8));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod big;
pub mod error;
pub mod modular;
pub mod number_theory;
pub mod quantization;
pub mod rational;
#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(test)]
mod proptests;

pub use error::{ArithmeticError, ParseRationalError, ZeroDivisor};
pub use modular::Residue;
pub use quantization::{
    default_quantization, reset_default_quantization, set_default_quantization, Quantization,
    FALLBACK_QUANTIZATION,
};
pub use rational::Rational;
