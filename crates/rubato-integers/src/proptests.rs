//! Property-based tests for the arithmetic kernel.

#[cfg(test)]
mod tests {
    use dashu::rational::RBig;
    use proptest::prelude::*;

    use crate::error::{ArithmeticError, ZeroDivisor};
    use crate::number_theory::{
        divide_mod, exgcd, gcd, inverse_mod, modulo, mul_mod, power_mod,
    };
    use crate::Rational;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn wide_int() -> impl Strategy<Value = i64> {
        (i64::MIN + 1)..=i64::MAX
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn non_zero_rational() -> impl Strategy<Value = Rational> {
        (non_zero_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    proptest! {
        // GCD properties

        #[test]
        fn gcd_commutative(a in wide_int(), b in wide_int()) {
            prop_assert_eq!(gcd(a, b), gcd(b, a));
        }

        #[test]
        fn gcd_with_zero(a in wide_int()) {
            prop_assert_eq!(gcd(a, 0), a.unsigned_abs());
            prop_assert_eq!(gcd(0, a), a.unsigned_abs());
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let g = gcd(a, b);
            prop_assert_eq!(a.unsigned_abs() % g, 0);
            prop_assert_eq!(b.unsigned_abs() % g, 0);
        }

        #[test]
        fn exgcd_bezout(a in wide_int(), b in wide_int()) {
            let (g, x, y) = exgcd(a, b);
            prop_assert!(g >= 0);
            prop_assert_eq!(g.unsigned_abs(), gcd(a, b));
            prop_assert_eq!(
                i128::from(a) * i128::from(x) + i128::from(b) * i128::from(y),
                i128::from(g)
            );
        }

        // Modular properties

        #[test]
        fn modulo_takes_sign_of_modulus(a in wide_int(), n in wide_int()) {
            prop_assume!(n != 0);
            let r = modulo(a, n);
            if n > 0 {
                prop_assert!((0..n).contains(&r));
            } else {
                prop_assert!(r <= 0 && r > n);
            }
            prop_assert_eq!((i128::from(a) - i128::from(r)) % i128::from(n), 0);
        }

        #[test]
        fn inverse_mod_inverts(a in wide_int(), n in 2i64..=i64::MAX) {
            match inverse_mod(a, n) {
                Ok(inv) => {
                    prop_assert_eq!(gcd(a, n), 1);
                    prop_assert!((0..n).contains(&inv));
                    prop_assert_eq!(mul_mod(a, inv, n), 1);
                }
                Err(err) => {
                    prop_assert_ne!(gcd(a, n), 1);
                    prop_assert_eq!(err, ZeroDivisor { value: a, modulus: n });
                }
            }
        }

        #[test]
        fn inverse_mod_zero_modulus(a in wide_int()) {
            prop_assert!(inverse_mod(a, 0).is_err());
        }

        #[test]
        fn divide_mod_undoes_mul(a in wide_int(), b in wide_int(), n in 2i64..=i64::MAX) {
            prop_assume!(gcd(b, n) == 1);
            let q = divide_mod(a, b, n).unwrap();
            prop_assert_eq!(mul_mod(q, b, n), modulo(a, n));
        }

        #[test]
        fn power_mod_zero_exponent(a in wide_int(), n in wide_int()) {
            prop_assert_eq!(power_mod(a, 0, n), Ok(1));
        }

        #[test]
        fn power_mod_negative_exponent(a in small_int(), e in 1i64..10_000, n in 2i64..1000) {
            let direct = power_mod(a, -e, n);
            let via_inverse = power_mod(a, e, n).and_then(|p| inverse_mod(p, n));
            prop_assert_eq!(direct.is_ok(), via_inverse.is_ok());
            if let (Ok(direct), Ok(via_inverse)) = (direct, via_inverse) {
                prop_assert_eq!(direct, via_inverse);
            }
        }

        #[test]
        fn power_mod_adds_exponents(
            a in wide_int(),
            e in 0i64..1_000_000,
            f in 0i64..1_000_000,
            n in 2i64..=i64::MAX
        ) {
            let lhs = power_mod(a, e + f, n).unwrap();
            let rhs = mul_mod(power_mod(a, e, n).unwrap(), power_mod(a, f, n).unwrap(), n);
            prop_assert_eq!(lhs, rhs);
        }

        // Rational invariants

        #[test]
        fn rational_lowest_terms(n in wide_int(), d in wide_int()) {
            prop_assume!(d != 0);
            let r = Rational::new(n, d).unwrap();
            prop_assert!(r.denominator() > 0);
            prop_assert_eq!(gcd(r.numerator(), r.denominator()), 1);
            // Reducing again changes nothing.
            prop_assert_eq!(Rational::new(r.numerator(), r.denominator()), Ok(r));
        }

        #[test]
        fn rational_display_round_trip(n in wide_int(), d in wide_int()) {
            prop_assume!(d != 0);
            let r = Rational::new(n, d).unwrap();
            prop_assert_eq!(r.to_string().parse::<Rational>(), Ok(r));
        }

        #[test]
        fn rational_difference_with_self_is_zero(r in rational()) {
            prop_assert_eq!(r.difference(r), Rational::ZERO);
            prop_assert_eq!(r.sum(-r), Rational::ZERO);
        }

        #[test]
        fn rational_quotient_with_self_is_one(r in non_zero_rational()) {
            prop_assert_eq!(r.quotient(r), Ok(Rational::ONE));
            prop_assert_eq!(r.quotient(Rational::ZERO), Err(ArithmeticError::DivisionByZero));
        }

        #[test]
        fn rational_multiplicative_inverse(r in non_zero_rational()) {
            let inv = r.inverse().unwrap();
            prop_assert!(inv.denominator() > 0);
            prop_assert!((r * inv).is_one());
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn rational_mul_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a * b, b * a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn rational_in_place_matches_pure(a in rational(), b in non_zero_rational()) {
            let mut x = a;
            x += b;
            prop_assert_eq!(x, a.sum(b));
            let mut y = a;
            y.divide(b).unwrap();
            prop_assert_eq!(y, a.quotient(b).unwrap());
        }

        #[test]
        fn rational_order_matches_f64(a in rational(), b in rational()) {
            if a < b {
                prop_assert!(a.to_f64() < b.to_f64());
            } else if a > b {
                prop_assert!(a.to_f64() > b.to_f64());
            } else {
                prop_assert_eq!(a, b);
            }
        }

        // Exact arithmetic agrees with dashu on the full 64-bit range

        #[test]
        fn rational_sum_matches_big(
            n1 in wide_int(), d1 in 1i64..=i64::MAX,
            n2 in wide_int(), d2 in 1i64..=i64::MAX
        ) {
            let a = Rational::new(n1, d1).unwrap();
            let b = Rational::new(n2, d2).unwrap();
            let exact = RBig::from(a) + RBig::from(b);
            prop_assert_eq!(a.checked_sum(b), Rational::try_from(&exact));
        }

        #[test]
        fn rational_product_matches_big(
            n1 in wide_int(), d1 in 1i64..=i64::MAX,
            n2 in wide_int(), d2 in 1i64..=i64::MAX
        ) {
            let a = Rational::new(n1, d1).unwrap();
            let b = Rational::new(n2, d2).unwrap();
            let exact = RBig::from(a) * RBig::from(b);
            prop_assert_eq!(a.checked_product(b), Rational::try_from(&exact));
        }

        // Quantization

        #[test]
        fn quantize_is_within_half_step(value in -1.0e6f64..1.0e6, d in 1i64..10_000) {
            let q = Rational::quantize(value, d).unwrap();
            prop_assert!(d % q.denominator() == 0);
            #[allow(clippy::cast_precision_loss)]
            let step = 1.0 / d as f64;
            prop_assert!((q.to_f64() - value).abs() <= step / 2.0 + 1e-9);
        }

        #[test]
        fn quantize_mirrors_negation(value in -1.0e6f64..1.0e6, d in 1i64..10_000) {
            prop_assert_eq!(
                Rational::quantize(-value, d).unwrap(),
                -Rational::quantize(value, d).unwrap()
            );
        }
    }
}
