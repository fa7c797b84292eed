//! Exact rational numbers with 64-bit numerator and denominator.
//!
//! Every [`Rational`] is kept in lowest terms with a positive denominator,
//! so equality and hashing compare fields directly. Intermediate products
//! are computed in `i128` and narrowed after reduction; a result that still
//! does not fit is reported as [`ArithmeticError::Overflow`] by the checked
//! operations and panics in the operator forms, as primitive integers do.

use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::str::FromStr;

use crate::error::{ArithmeticError, ParseRationalError};
use crate::number_theory::gcd_wide;
use crate::quantization::default_quantization;

/// An exact fraction `numerator / denominator`.
///
/// Rationals are always stored in lowest terms with a positive denominator.
/// Zero is `0/1`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// The canonical zero, `0/1`.
    pub const ZERO: Self = Self::from_integer(0);

    /// The canonical one, `1/1`.
    pub const ONE: Self = Self::from_integer(1);

    /// Creates a rational from numerator and denominator, reduced to lowest
    /// terms.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if the denominator is
    /// zero, and [`ArithmeticError::Overflow`] for `i64::MIN / -1`.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        Self::from_wide(i128::from(numerator), i128::from(denominator))
    }

    /// Creates the rational `n/1`.
    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self {
            numerator: n,
            denominator: 1,
        }
    }

    /// Reduces a wide fraction and narrows it back to 64 bits.
    fn from_wide(numerator: i128, denominator: i128) -> Result<Self, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (numerator, denominator) = reduce(numerator, denominator);
        match (i64::try_from(numerator), i64::try_from(denominator)) {
            (Ok(numerator), Ok(denominator)) => Ok(Self {
                numerator,
                denominator,
            }),
            _ => Err(ArithmeticError::Overflow),
        }
    }

    /// Quantizes `value` to the nearest multiple of `1 / max_denominator`,
    /// then reduces.
    ///
    /// Halves round away from zero, so negative values mirror positive ones:
    /// `47.125` with bound `16` is `377/8`, `-47.125` is `-377/8`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NotFinite`] for NaN or infinite input,
    /// [`ArithmeticError::DivisionByZero`] if `max_denominator` is zero, and
    /// [`ArithmeticError::Overflow`] if the scaled value leaves `i64`.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn quantize(value: f64, max_denominator: i64) -> Result<Self, ArithmeticError> {
        if !value.is_finite() {
            return Err(ArithmeticError::NotFinite);
        }
        if max_denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        let scaled = (value * max_denominator as f64).round();
        // i64::MIN as f64 is exactly -2^63; i64::MAX as f64 rounds up to 2^63.
        if !(i64::MIN as f64..i64::MAX as f64).contains(&scaled) {
            return Err(ArithmeticError::Overflow);
        }
        Self::new(scaled as i64, max_denominator)
    }

    /// Quantizes `value` against the process-wide default denominator.
    ///
    /// # Errors
    ///
    /// See [`Rational::quantize`].
    pub fn from_f64(value: f64) -> Result<Self, ArithmeticError> {
        Self::quantize(value, default_quantization())
    }

    /// Parses the `<int>` or `<int>/<int>` text form.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseRationalError`] when the text does not match.
    pub fn parse(text: &str) -> Result<Self, ParseRationalError> {
        text.parse()
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator, which is always positive.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Returns true if this is zero.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.numerator == 0
    }

    /// Returns true if this is one.
    #[must_use]
    pub const fn is_one(self) -> bool {
        self.numerator == 1 && self.denominator == 1
    }

    /// Returns true if negative.
    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.numerator < 0
    }

    /// Returns true if the denominator is 1.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.denominator == 1
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub const fn to_integer(self) -> Option<i64> {
        if self.is_integer() {
            Some(self.numerator)
        } else {
            None
        }
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub const fn signum(self) -> i64 {
        self.numerator.signum()
    }

    /// Returns the absolute value.
    ///
    /// # Panics
    ///
    /// Panics if the numerator is `i64::MIN`.
    #[must_use]
    pub fn abs(self) -> Self {
        if self.is_negative() {
            -self
        } else {
            self
        }
    }

    /// Returns the largest integer not greater than this value.
    #[must_use]
    pub const fn floor(self) -> i64 {
        self.numerator.div_euclid(self.denominator)
    }

    /// Returns the smallest integer not less than this value.
    #[must_use]
    pub const fn ceil(self) -> i64 {
        let q = self.floor();
        if self.is_integer() {
            q
        } else {
            q + 1
        }
    }

    /// Converts to the nearest `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Returns `self + rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the reduced sum leaves `i64`.
    pub fn checked_sum(self, rhs: impl Into<Self>) -> Result<Self, ArithmeticError> {
        let rhs = rhs.into();
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.wide();
        Self::from_wide(n1 * d2 + n2 * d1, d1 * d2)
    }

    /// Returns `self - rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the reduced difference
    /// leaves `i64`.
    pub fn checked_difference(self, rhs: impl Into<Self>) -> Result<Self, ArithmeticError> {
        let rhs = rhs.into();
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.wide();
        Self::from_wide(n1 * d2 - n2 * d1, d1 * d2)
    }

    /// Returns `self * rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the reduced product leaves
    /// `i64`.
    pub fn checked_product(self, rhs: impl Into<Self>) -> Result<Self, ArithmeticError> {
        let rhs = rhs.into();
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.wide();
        Self::from_wide(n1 * n2, d1 * d2)
    }

    /// Returns `self / rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `rhs` is zero and
    /// [`ArithmeticError::Overflow`] if the reduced quotient leaves `i64`.
    pub fn quotient(self, rhs: impl Into<Self>) -> Result<Self, ArithmeticError> {
        let rhs = rhs.into();
        let (n1, d1) = self.wide();
        let (n2, d2) = rhs.wide();
        Self::from_wide(n1 * d2, d1 * n2)
    }

    /// Returns `1 / self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if this is zero and
    /// [`ArithmeticError::Overflow`] when the numerator is `i64::MIN`.
    pub fn inverse(self) -> Result<Self, ArithmeticError> {
        let (n, d) = self.wide();
        Self::from_wide(d, n)
    }

    /// Returns `self + rhs`.
    ///
    /// # Panics
    ///
    /// Panics on overflow; see [`Rational::checked_sum`].
    #[must_use]
    pub fn sum(self, rhs: impl Into<Self>) -> Self {
        overflow_checked(self.checked_sum(rhs), "add")
    }

    /// Returns `self - rhs`.
    ///
    /// # Panics
    ///
    /// Panics on overflow; see [`Rational::checked_difference`].
    #[must_use]
    pub fn difference(self, rhs: impl Into<Self>) -> Self {
        overflow_checked(self.checked_difference(rhs), "subtract")
    }

    /// Returns `self * rhs`.
    ///
    /// # Panics
    ///
    /// Panics on overflow; see [`Rational::checked_product`].
    #[must_use]
    pub fn product(self, rhs: impl Into<Self>) -> Self {
        overflow_checked(self.checked_product(rhs), "multiply")
    }

    /// Subtracts `rhs` in place. The in-place add is `+=`.
    ///
    /// # Panics
    ///
    /// Panics on overflow.
    pub fn subtract(&mut self, rhs: impl Into<Self>) {
        *self = self.difference(rhs);
    }

    /// Multiplies by `rhs` in place.
    ///
    /// # Panics
    ///
    /// Panics on overflow.
    pub fn multiply(&mut self, rhs: impl Into<Self>) {
        *self = self.product(rhs);
    }

    /// Divides by `rhs` in place. On error the value is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`Rational::quotient`].
    pub fn divide(&mut self, rhs: impl Into<Self>) -> Result<(), ArithmeticError> {
        *self = self.quotient(rhs)?;
        Ok(())
    }

    /// Replaces this value with its inverse. On error the value is left
    /// unchanged.
    ///
    /// # Errors
    ///
    /// See [`Rational::inverse`].
    pub fn invert(&mut self) -> Result<(), ArithmeticError> {
        *self = self.inverse()?;
        Ok(())
    }

    /// Computes `self^exp`. A negative exponent inverts first.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for zero raised to a
    /// negative power and [`ArithmeticError::Overflow`] if the result leaves
    /// `i64`.
    pub fn pow(self, exp: i32) -> Result<Self, ArithmeticError> {
        let base = if exp < 0 { self.inverse()? } else { self };
        let exp = exp.unsigned_abs();
        // Powers of coprime integers stay coprime, so no reduction is needed.
        match (
            base.numerator.checked_pow(exp),
            base.denominator.checked_pow(exp),
        ) {
            (Some(numerator), Some(denominator)) => Ok(Self {
                numerator,
                denominator,
            }),
            _ => Err(ArithmeticError::Overflow),
        }
    }

    fn wide(self) -> (i128, i128) {
        (i128::from(self.numerator), i128::from(self.denominator))
    }
}

/// Brings a fraction with non-zero denominator into lowest terms with a
/// positive denominator.
fn reduce(mut numerator: i128, mut denominator: i128) -> (i128, i128) {
    if numerator == 0 {
        return (0, 1);
    }
    if denominator < 0 {
        numerator = -numerator;
        denominator = -denominator;
    }
    let g = gcd_wide(numerator.unsigned_abs(), denominator.unsigned_abs());
    if g > 1 {
        // g divides both operands, so it is at most i128::MAX.
        #[allow(clippy::cast_possible_wrap)]
        let g = g as i128;
        numerator /= g;
        denominator /= g;
    }
    (numerator, denominator)
}

fn overflow_checked(result: Result<Rational, ArithmeticError>, op: &str) -> Rational {
    match result {
        Ok(value) => value,
        Err(err) => panic!("attempt to {op} rationals failed: {err}"),
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        Rational::is_one(*self)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // Denominators are positive, so cross-multiplying keeps the order.
        let (n1, d1) = self.wide();
        let (n2, d2) = other.wide();
        (n1 * d2).cmp(&(n2 * d1))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRationalError::Empty);
        }

        let mut parts = s.split('/');
        let numerator = parse_part(parts.next().unwrap_or_default())?;
        let denominator = match parts.next() {
            None => 1,
            Some("") => return Err(ParseRationalError::Malformed),
            Some(part) => parse_part(part)?,
        };
        if parts.next().is_some() {
            return Err(ParseRationalError::Malformed);
        }

        Self::new(numerator, denominator).map_err(|err| match err {
            ArithmeticError::DivisionByZero => ParseRationalError::ZeroDenominator,
            ArithmeticError::Overflow | ArithmeticError::NotFinite => {
                ParseRationalError::OutOfRange
            }
        })
    }
}

/// Parses an optional `-` followed by ASCII digits.
fn parse_part(part: &str) -> Result<i64, ParseRationalError> {
    let digits = part.strip_prefix('-').unwrap_or(part);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseRationalError::InvalidInteger(part.to_string()));
    }
    part.parse().map_err(|_| ParseRationalError::OutOfRange)
}

// Arithmetic operations
impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.sum(rhs)
    }
}

impl Add<i64> for Rational {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        self.sum(rhs)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl Sub<i64> for Rational {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        self.difference(rhs)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.product(rhs)
    }
}

impl Mul<i64> for Rational {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        self.product(rhs)
    }
}

impl Div for Rational {
    type Output = Self;

    /// Panics on a zero divisor; use [`Rational::quotient`] to handle it.
    fn div(self, rhs: Self) -> Self::Output {
        match self.quotient(rhs) {
            Ok(value) => value,
            Err(err) => panic!("attempt to divide rationals failed: {err}"),
        }
    }
}

impl Div<i64> for Rational {
    type Output = Self;

    fn div(self, rhs: i64) -> Self::Output {
        self / Self::from(rhs)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self.numerator.checked_neg() {
            Some(numerator) => Self {
                numerator,
                denominator: self.denominator,
            },
            None => panic!("attempt to negate rational with overflow"),
        }
    }
}

impl AddAssign for Rational {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.sum(rhs);
    }
}

impl AddAssign<i64> for Rational {
    fn add_assign(&mut self, rhs: i64) {
        *self = self.sum(rhs);
    }
}

impl SubAssign for Rational {
    fn sub_assign(&mut self, rhs: Self) {
        self.subtract(rhs);
    }
}

impl SubAssign<i64> for Rational {
    fn sub_assign(&mut self, rhs: i64) {
        self.subtract(rhs);
    }
}

impl MulAssign for Rational {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(rhs);
    }
}

impl MulAssign<i64> for Rational {
    fn mul_assign(&mut self, rhs: i64) {
        self.multiply(rhs);
    }
}

impl DivAssign for Rational {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, |acc, x| acc * x)
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Self::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Self::from_integer(i64::from(n))
    }
}

impl From<Rational> for f64 {
    fn from(r: Rational) -> Self {
        r.to_f64()
    }
}
