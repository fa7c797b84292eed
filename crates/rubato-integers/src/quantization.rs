//! Quantization of floating-point values to bounded-denominator rationals.
//!
//! A [`Quantization`] carries the denominator explicitly. The process-wide
//! default is used by [`Rational::from_f64`] and is meant to be set from a
//! user preference at startup; it only affects rationals built afterwards.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::error::ArithmeticError;
use crate::Rational;

/// The default quantization denominator, matching MIDI tick granularity.
pub const FALLBACK_QUANTIZATION: i64 = 1920;

static DEFAULT_QUANTIZATION: AtomicI64 = AtomicI64::new(FALLBACK_QUANTIZATION);

/// Returns the process-wide default quantization denominator.
#[must_use]
pub fn default_quantization() -> i64 {
    DEFAULT_QUANTIZATION.load(Ordering::Relaxed)
}

/// Sets the process-wide default quantization denominator.
///
/// Negative values are replaced by their absolute value and zero by
/// [`FALLBACK_QUANTIZATION`]. Concurrent setters race; the last store wins.
pub fn set_default_quantization(denominator: i64) {
    let quantization = Quantization::new(denominator);
    if quantization.denominator() != denominator {
        tracing::warn!(
            requested = denominator,
            applied = quantization.denominator(),
            "clamped default quantization denominator"
        );
    }
    DEFAULT_QUANTIZATION.store(quantization.denominator(), Ordering::Relaxed);
    tracing::debug!(
        denominator = quantization.denominator(),
        "default quantization updated"
    );
}

/// Restores the default quantization denominator to
/// [`FALLBACK_QUANTIZATION`].
pub fn reset_default_quantization() {
    set_default_quantization(FALLBACK_QUANTIZATION);
}

/// A positive denominator bound for quantizing floats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Quantization(i64);

impl Quantization {
    /// Creates a quantization, taking the absolute value of `denominator`
    /// and mapping zero to [`FALLBACK_QUANTIZATION`].
    #[must_use]
    pub const fn new(denominator: i64) -> Self {
        if denominator == 0 {
            Self(FALLBACK_QUANTIZATION)
        } else {
            Self(denominator.saturating_abs())
        }
    }

    /// Reads the current process-wide default.
    #[must_use]
    pub fn global() -> Self {
        Self(default_quantization())
    }

    /// Returns the denominator bound.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.0
    }

    /// Quantizes `value` against this denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotFinite`] for NaN or infinite input and
    /// [`ArithmeticError::Overflow`] if the scaled value leaves `i64`.
    pub fn quantize(self, value: f64) -> Result<Rational, ArithmeticError> {
        Rational::quantize(value, self.0)
    }
}

impl Default for Quantization {
    fn default() -> Self {
        Self(FALLBACK_QUANTIZATION)
    }
}

impl From<i64> for Quantization {
    fn from(denominator: i64) -> Self {
        Self::new(denominator)
    }
}
