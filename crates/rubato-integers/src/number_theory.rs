//! Integer and modular arithmetic primitives.
//!
//! All functions are pure and allocation-free. Operands are `i64`; any
//! product that could leave 64 bits is carried out in `i128`.
//!
//! Sign conventions:
//! - [`gcd`] is never negative.
//! - [`modulo`] is a floor modulo: the result takes the sign of the modulus.
//! - [`exgcd`] coefficients follow the recursive extended Euclid on
//!   truncating division, with the triple negated at the end when the
//!   recursion yields a negative gcd.

use crate::error::ZeroDivisor;

/// Computes the greatest common divisor with Euclid's algorithm.
///
/// The result is never negative and `gcd(0, 0) == 0`. The return type is
/// unsigned so that `gcd(i64::MIN, 0)` is representable.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn gcd(a: i64, b: i64) -> u64 {
    // Bounded by max(|a|, |b|) <= 2^63.
    gcd_wide(u128::from(a.unsigned_abs()), u128::from(b.unsigned_abs())) as u64
}

pub(crate) fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Computes the least common multiple of `|a|` and `|b|`.
///
/// Returns `Some(0)` if either operand is zero and `None` if the result
/// does not fit in a `u64`.
#[must_use]
pub fn lcm(a: i64, b: i64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    let g = gcd(a, b);
    (a.unsigned_abs() / g).checked_mul(b.unsigned_abs())
}

/// Extended Euclid: returns `(g, x, y)` with `a*x + b*y == g == gcd(a, b)`.
///
/// `exgcd(a, 0)` is `(|a|, sign(a), 0)` (with `exgcd(0, 0) == (0, 1, 0)`)
/// and `exgcd(0, b)` is `(|b|, 0, sign(b))`.
///
/// # Panics
///
/// Panics if the gcd is `2^63`, which only happens when both operands are
/// `0` or `i64::MIN`.
#[must_use]
pub fn exgcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (g, x, y) = exgcd_wide(i128::from(a), i128::from(b));
    match (i64::try_from(g), i64::try_from(x), i64::try_from(y)) {
        (Ok(g), Ok(x), Ok(y)) => (g, x, y),
        _ => panic!("extended gcd of {a} and {b} overflows i64"),
    }
}

fn exgcd_wide(a: i128, b: i128) -> (i128, i128, i128) {
    let (g, x, y) = exgcd_rec(a, b);
    if g < 0 {
        (-g, -x, -y)
    } else {
        (g, x, y)
    }
}

fn exgcd_rec(a: i128, b: i128) -> (i128, i128, i128) {
    if b == 0 {
        return (a, 1, 0);
    }
    let (g, x, y) = exgcd_rec(b, a % b);
    (g, y, x - (a / b) * y)
}

/// Floor modulo: the result lies in `[0, n)` for positive `n` and in
/// `(n, 0]` for negative `n`.
///
/// Unlike `%`, a negative `a` never yields a result of the opposite sign
/// to `n`, which makes this suitable for ring-buffer indexing.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn modulo(a: i64, n: i64) -> i64 {
    assert!(n != 0, "modulus cannot be zero");
    let r = a.wrapping_rem(n);
    if r != 0 && (r < 0) != (n < 0) {
        r + n
    } else {
        r
    }
}

pub(crate) fn modulo_wide(a: i128, n: i128) -> i128 {
    let r = a % n;
    if r != 0 && (r < 0) != (n < 0) {
        r + n
    } else {
        r
    }
}

/// Narrows a value already reduced modulo an `i64` modulus.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn narrow_reduced(r: i128) -> i64 {
    // r lies between 0 and an i64 modulus, so it fits.
    r as i64
}

/// Computes `a * b` reduced by [`modulo`] without intermediate overflow.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn mul_mod(a: i64, b: i64, n: i64) -> i64 {
    assert!(n != 0, "modulus cannot be zero");
    narrow_reduced(modulo_wide(
        i128::from(a) * i128::from(b),
        i128::from(n),
    ))
}

/// Computes the inverse of `a` modulo `n`, normalized with [`modulo`].
///
/// # Errors
///
/// Returns [`ZeroDivisor`] if `gcd(a, n) != 1`, which includes `n == 0`.
pub fn inverse_mod(a: i64, n: i64) -> Result<i64, ZeroDivisor> {
    if n == 0 {
        return Err(ZeroDivisor::new(a, n));
    }
    let (g, x, _) = exgcd_wide(i128::from(a), i128::from(n));
    if g != 1 {
        return Err(ZeroDivisor::new(a, n));
    }
    Ok(narrow_reduced(modulo_wide(x, i128::from(n))))
}

/// Computes `a / b` modulo `n`, i.e. `a * inverse_mod(b, n)`.
///
/// # Errors
///
/// Returns [`ZeroDivisor`] if `b` is not invertible modulo `n`.
pub fn divide_mod(a: i64, b: i64, n: i64) -> Result<i64, ZeroDivisor> {
    let inv = inverse_mod(b, n)?;
    Ok(mul_mod(a, inv, n))
}

/// Computes `a^e` modulo `n` by repeated squaring.
///
/// A negative exponent raises the inverse of `a` to `-e`. `e == 0` yields
/// `1` for every `a` and `n`.
///
/// # Errors
///
/// Returns [`ZeroDivisor`] if `e < 0` and `a` is not invertible modulo `n`,
/// or if `e != 0` and `n == 0`.
pub fn power_mod(a: i64, e: i64, n: i64) -> Result<i64, ZeroDivisor> {
    if e == 0 {
        return Ok(1);
    }
    if n == 0 {
        return Err(ZeroDivisor::new(a, n));
    }

    let base = if e < 0 { inverse_mod(a, n)? } else { a };
    let n = i128::from(n);
    let mut base = modulo_wide(i128::from(base), n);
    let mut result = modulo_wide(1, n);
    let mut exp = e.unsigned_abs();

    // Operands stay below |n| <= 2^63, so each product fits in i128.
    while exp > 0 {
        if exp & 1 == 1 {
            result = modulo_wide(result * base, n);
        }
        base = modulo_wide(base * base, n);
        exp >>= 1;
    }

    Ok(narrow_reduced(result))
}
