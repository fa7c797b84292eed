//! # Rubato
//!
//! The mathematical kernel of Rubato Composer: exact rational arithmetic
//! and number theory backing denotator and form computations.
//!
//! ## Quick Start
//!
//! ```
//! use rubato::prelude::*;
//!
//! let onset = Rational::quantize(47.324, 8).unwrap();
//! assert_eq!(onset.to_string(), "379/8");
//!
//! let step: Rational = "1/8".parse().unwrap();
//! assert_eq!(onset + step, Rational::new(95, 2).unwrap());
//!
//! assert_eq!(inverse_mod(1365, 187), Ok(177));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use rubato_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use rubato_integers::number_theory::{
        divide_mod, exgcd, gcd, inverse_mod, modulo, power_mod,
    };
    pub use rubato_integers::{
        default_quantization, set_default_quantization, ArithmeticError, ParseRationalError,
        Quantization, Rational, Residue, ZeroDivisor,
    };
}
