use bigcomplex::{BigComplex, Context, Error};
use bigdecimal::BigDecimal;
use std::str::FromStr;

fn z(text: &str) -> BigComplex {
    text.parse().unwrap()
}

fn dec(text: &str) -> BigDecimal {
    BigDecimal::from_str(text).unwrap()
}

#[test]
fn rectangular_arithmetic() {
    assert_eq!(z("3 + 13i").add(&z("7 + 5i")), z("10 + 18i"));
    assert_eq!(z("7 + 5i").subtract(&z("3 + 13i")), z("4 - 8i"));
    assert_eq!(z("7 + 5i").multiply(&z("3 + 13i")), z("-44 + 106i"));
    assert_eq!(z("6 + 4i").divide(&z("3 + 2i")).unwrap(), z("2"));
}

#[test]
fn operators_match_named_functions() {
    let a = z("7 + 5i");
    let b = z("3 + 13i");
    assert_eq!(&a + &b, a.add(&b));
    assert_eq!(&a - &b, a.subtract(&b));
    assert_eq!(&a * &b, a.multiply(&b));
    assert_eq!(-&a, a.negate());
}

#[test]
fn magnitude_and_conjugate() {
    let ctx = Context::default();
    assert_eq!(z("4 + 3i").abs(&ctx).unwrap(), dec("5"));
    assert_eq!(z("4").abs(&ctx).unwrap(), dec("4"));
    assert_eq!(z("4 + 3i").conjugate(), z("4 - 3i"));
}

#[test]
fn reciprocal() {
    assert_eq!(z("i").reciprocal(), z("0 - 1i"));
    assert_eq!(z("4i").reciprocal(), z("-0.25i"));
    // by convention rather than by arithmetic
    assert_eq!(BigComplex::zero().reciprocal(), BigComplex::zero());
}

#[test]
fn division_by_zero_is_an_error() {
    assert_eq!(z("1 + i").divide(&BigComplex::zero()), Err(Error::DivisionByZero));
    assert_eq!(z("1 + i").modulo(&BigComplex::zero()), Err(Error::DivisionByZero));
    assert_eq!(z("1 + i").checked_div(&BigComplex::zero()), None);
}

#[test]
fn modulo_rounds_components_independently() {
    // (4 + 4i) / (2 + 2i) is exactly 2, no remainder
    assert_eq!(z("4 + 4i").modulo(&z("2 + 2i")).unwrap(), BigComplex::zero());
    // 1 / (1 + i) = 0.5 - 0.5i, both halves round to the even zero
    assert_eq!(z("1").modulo(&z("1 + i")).unwrap(), z("1"));
}

#[test]
fn sign_follows_real_then_imaginary() {
    use bigcomplex::Sign;
    assert_eq!(z("-2 + 5i").sign(), Sign::Minus);
    assert_eq!(z("0 - 5i").sign(), Sign::Minus);
    assert_eq!(z("0 + 5i").sign(), Sign::Plus);
}

#[test]
fn equality_compares_exact_components() {
    let a = BigComplex::new(dec("3.000"), dec("0"));
    assert_eq!(a, z("3"));
    assert_eq!(a, BigComplex::from(3i64));
    assert_ne!(a, z("3.0000000000000000000001"));
}

#[test]
fn hashing_agrees_with_equality() {
    use std::collections::HashSet;
    let mut seen = HashSet::new();
    seen.insert(z("3 + 4i"));
    assert!(seen.contains(&BigComplex::new(dec("3"), dec("4"))));
    assert!(!seen.contains(&z("3 - 4i")));
}

#[test]
fn gcd_of_gaussian_multiples() {
    let ctx = Context::default();
    let a = z("12 + 8i");
    let b = z("3 + 2i");
    assert_eq!(a.gcd(&b, &ctx).unwrap(), b);
    assert_eq!(b.gcd(&a, &ctx).unwrap(), b);
}
