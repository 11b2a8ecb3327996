// The complex value itself: representation, construction and exact arithmetic
// Nothing in here needs a precision, except the magnitude.

use crate::context::Context;
use crate::error::{Error, Result};
use crate::numbers::{self, integer_digits, nth_root, quotient};
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// A complex number with arbitrary precision decimal parts.
///
/// Values are immutable; every operation returns a new value. Equality and
/// hashing compare the two parts as exact decimals, so `3 + 0i` built from
/// `3.00` equals `3`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BigComplex {
    re: BigDecimal,
    im: BigDecimal,
}

impl BigComplex {
    pub fn new(re: BigDecimal, im: BigDecimal) -> Self {
        Self { re, im }
    }

    pub fn from_real(re: BigDecimal) -> Self {
        Self::new(re, BigDecimal::zero())
    }

    /// Builds a value from a pair of floats, `None` for NaN or infinities.
    ///
    /// Goes through the decimal type's float conversion, so only the digits a
    /// float actually carries make it into the value.
    pub fn from_f64(re: f64, im: f64) -> Option<Self> {
        Some(Self::new(
            BigDecimal::from_f64(re)?,
            BigDecimal::from_f64(im)?,
        ))
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn one() -> Self {
        Self::from_real(BigDecimal::one())
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(BigDecimal::zero(), BigDecimal::one())
    }

    pub fn real(&self) -> &BigDecimal {
        &self.re
    }

    pub fn imaginary(&self) -> &BigDecimal {
        &self.im
    }

    pub fn into_parts(self) -> (BigDecimal, BigDecimal) {
        (self.re, self.im)
    }

    pub fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }

    /// Sign of the real part, or of the imaginary part when the real part is
    /// zero. A total ordering proxy, not a complex signum.
    pub fn sign(&self) -> Sign {
        if self.re.is_zero() {
            self.im.sign()
        } else {
            self.re.sign()
        }
    }

    pub fn negate(&self) -> Self {
        Self::new(-&self.re, -&self.im)
    }

    pub fn add(&self, other: &Self) -> Self {
        Self::new(&self.re + &other.re, &self.im + &other.im)
    }

    pub fn subtract(&self, other: &Self) -> Self {
        Self::new(&self.re - &other.re, &self.im - &other.im)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        // (a + bi)(c + di) = (ac - bd) + (bc + ad)i
        let re = &self.re * &other.re - &self.im * &other.im;
        let im = &self.im * &other.re + &self.re * &other.im;
        Self::new(re, im)
    }

    /// Multiplies both parts by a real factor.
    pub fn scale(&self, factor: &BigDecimal) -> Self {
        Self::new(&self.re * factor, &self.im * factor)
    }

    // i * (a + bi) = -b + ai
    pub(crate) fn times_i(&self) -> Self {
        Self::new(-&self.im, self.re.clone())
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.re.clone(), -&self.im)
    }

    /// Divides by multiplying both sides with the divisor's conjugate, which
    /// leaves the real denominator `c^2 + d^2`.
    ///
    /// The two remaining real divisions are the decimal type's own, exact when
    /// the quotient terminates and cut at 100 significant digits otherwise.
    pub fn divide(&self, divisor: &Self) -> Result<Self> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(self.divide_nonzero(divisor))
    }

    /// Same as [`divide`](Self::divide), `None` for a zero divisor.
    pub fn checked_div(&self, divisor: &Self) -> Option<Self> {
        self.divide(divisor).ok()
    }

    fn divide_nonzero(&self, divisor: &Self) -> Self {
        let conjugate = divisor.conjugate();
        let numerator = self.multiply(&conjugate);
        let denominator = divisor.multiply(&conjugate);
        debug_assert!(denominator.im.is_zero());
        Self::new(
            numerator.re / &denominator.re,
            numerator.im / &denominator.re,
        )
    }

    /// `1 / z`, and zero for zero.
    ///
    /// The zero case is a convention rather than arithmetic: it is the one
    /// place where a zero divisor does not produce [`Error::DivisionByZero`].
    pub fn reciprocal(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        Self::one().divide_nonzero(self)
    }

    /// Remainder after subtracting the Gaussian integer multiple of `modulus`
    /// nearest to `self / modulus`.
    ///
    /// The quotient is rounded part by part (ties to even), not to the
    /// Gaussian integer nearest in the plane, so the remainder is not always
    /// the smallest one.
    pub fn modulo(&self, modulus: &Self) -> Result<Self> {
        let negated = self.divide(modulus)?.negate();
        let rounded = Self::new(
            numbers::round_half_even(&negated.re),
            numbers::round_half_even(&negated.im),
        );
        Ok(self.add(&modulus.multiply(&rounded)))
    }

    /// Magnitude `sqrt(re^2 + im^2)`, rounded to the context precision.
    pub fn abs(&self, ctx: &Context) -> Result<BigDecimal> {
        Ok(ctx.round(&self.abs_with(ctx.working())?))
    }

    pub fn magnitude(&self, ctx: &Context) -> Result<BigDecimal> {
        self.abs(ctx)
    }

    pub fn norm(&self, ctx: &Context) -> Result<BigDecimal> {
        self.abs(ctx)
    }

    // The larger part is factored out of the root, |z| = c sqrt(1 + (d/c)^2),
    // so the squared term stays between one and two.
    pub(crate) fn abs_with(&self, places: u64) -> Result<BigDecimal> {
        let c = self.re.abs();
        let d = self.im.abs();
        if c.is_zero() {
            return nth_root(&(&d * &d), 2, places);
        }
        let one = BigDecimal::one();
        if c > d {
            let digits = places + integer_digits(&c);
            let r = quotient(&d, &c, digits);
            let root = nth_root(&(one + &r * &r), 2, digits)?;
            Ok(numbers::round(&(c * root), places))
        } else if d.is_zero() {
            Ok(c)
        } else {
            let digits = places + integer_digits(&d);
            let r = quotient(&c, &d, digits);
            let root = nth_root(&(one + &r * &r), 2, digits)?;
            Ok(numbers::round(&(d * root), places))
        }
    }

    // Zeros between the decimal point and the first digit of the larger part
    pub(crate) fn leading_zeros(&self) -> u64 {
        let larger = if self.re.abs() > self.im.abs() {
            &self.re
        } else {
            &self.im
        };
        if larger.is_zero() {
            return 0;
        }
        (-numbers::magnitude(larger) - 1).max(0) as u64
    }

    /// Exact power with a non-negative integer exponent, by squaring.
    pub fn powi(&self, exponent: u32) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.multiply(&base);
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.multiply(&base);
            }
        }
        result
    }

    /// Both parts rounded half away from zero to `places` fractional digits.
    pub fn round(&self, places: u64) -> Self {
        Self::new(
            numbers::round(&self.re, places),
            numbers::round(&self.im, places),
        )
    }
}

impl From<BigDecimal> for BigComplex {
    fn from(re: BigDecimal) -> Self {
        Self::from_real(re)
    }
}

impl From<(BigDecimal, BigDecimal)> for BigComplex {
    fn from((re, im): (BigDecimal, BigDecimal)) -> Self {
        Self::new(re, im)
    }
}

impl From<BigInt> for BigComplex {
    fn from(re: BigInt) -> Self {
        Self::from_real(BigDecimal::from(re))
    }
}

impl From<i64> for BigComplex {
    fn from(re: i64) -> Self {
        Self::from_real(BigDecimal::from(re))
    }
}

impl From<u64> for BigComplex {
    fn from(re: u64) -> Self {
        Self::from_real(BigDecimal::from(re))
    }
}

// Operators delegate to the named methods, for owned and borrowed operands
macro_rules! forward_binop {
    ($Op:ident, $op:ident, $method:ident) => {
        impl<'a, 'b> $Op<&'b BigComplex> for &'a BigComplex {
            type Output = BigComplex;
            fn $op(self, rhs: &'b BigComplex) -> BigComplex {
                BigComplex::$method(self, rhs)
            }
        }

        impl<'a> $Op<&'a BigComplex> for BigComplex {
            type Output = BigComplex;
            fn $op(self, rhs: &'a BigComplex) -> BigComplex {
                BigComplex::$method(&self, rhs)
            }
        }

        impl<'a> $Op<BigComplex> for &'a BigComplex {
            type Output = BigComplex;
            fn $op(self, rhs: BigComplex) -> BigComplex {
                BigComplex::$method(self, &rhs)
            }
        }

        impl $Op<BigComplex> for BigComplex {
            type Output = BigComplex;
            fn $op(self, rhs: BigComplex) -> BigComplex {
                BigComplex::$method(&self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, subtract);
forward_binop!(Mul, mul, multiply);

impl Neg for BigComplex {
    type Output = BigComplex;
    fn neg(self) -> BigComplex {
        self.negate()
    }
}

impl<'a> Neg for &'a BigComplex {
    type Output = BigComplex;
    fn neg(self) -> BigComplex {
        self.negate()
    }
}

impl Zero for BigComplex {
    fn zero() -> Self {
        BigComplex::zero()
    }

    fn is_zero(&self) -> bool {
        BigComplex::is_zero(self)
    }
}

impl One for BigComplex {
    fn one() -> Self {
        BigComplex::one()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn c(re: i64, im: i64) -> BigComplex {
        BigComplex::new(BigDecimal::from(re), BigDecimal::from(im))
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn arithmetic() {
        assert_eq!(c(3, 13) + c(7, 5), c(10, 18));
        assert_eq!(c(7, 5) - c(3, 13), c(4, -8));
        assert_eq!(c(7, 5) * c(3, 13), c(-44, 106));
        assert_eq!(-c(1, -2), c(-1, 2));
    }

    #[test]
    fn division() {
        assert_eq!(c(6, 4).divide(&c(3, 2)).unwrap(), c(2, 0));
        assert_eq!(c(1, 0).divide(&c(0, 1)).unwrap(), c(0, -1));
        assert_eq!(c(1, 1).divide(&c(0, 0)), Err(Error::DivisionByZero));
        assert_eq!(c(1, 1).checked_div(&c(0, 0)), None);
    }

    #[test]
    fn reciprocal_of_zero_is_zero() {
        assert_eq!(c(0, 0).reciprocal(), c(0, 0));
        assert_eq!(c(0, 1).reciprocal(), c(0, -1));
        assert_eq!(c(2, 0).reciprocal(), BigComplex::from_real(dec("0.5")));
    }

    #[test]
    fn conjugate_and_sign() {
        assert_eq!(c(4, 3).conjugate(), c(4, -3));
        assert_eq!(c(-4, 3).sign(), Sign::Minus);
        assert_eq!(c(0, 3).sign(), Sign::Plus);
        assert_eq!(c(0, -3).sign(), Sign::Minus);
        assert_eq!(c(0, 0).sign(), Sign::NoSign);
    }

    #[test]
    fn magnitude() {
        let ctx = Context::default();
        assert_eq!(c(4, 3).abs(&ctx).unwrap(), dec("5"));
        assert_eq!(c(3, 4).abs(&ctx).unwrap(), dec("5"));
        assert_eq!(c(4, 0).abs(&ctx).unwrap(), dec("4"));
        assert_eq!(c(0, -7).abs(&ctx).unwrap(), dec("7"));
        assert_eq!(c(0, 0).abs(&ctx).unwrap(), dec("0"));
        assert_eq!(
            c(1, 1).abs(&ctx).unwrap(),
            dec("1.41421356237309504880")
        );
    }

    #[test]
    fn magnitude_of_unbalanced_parts() {
        let ctx = Context::default();
        let z = BigComplex::new(dec("1e30"), dec("1"));
        // sqrt(1e60 + 1) = 1e30 + 5e-31 - ...
        assert_eq!(z.abs(&ctx).unwrap(), dec("1e30"));
        let z = BigComplex::new(dec("3e-15"), dec("4e-15"));
        assert_eq!(z.abs(&ctx).unwrap(), dec("5e-15"));
    }

    #[test]
    fn modulo_rounds_each_part() {
        // 7 + 5i over 3: quotient 2.33 + 1.67i, negated and rounded -2 - 2i
        assert_eq!(c(7, 5).modulo(&c(3, 0)).unwrap(), c(1, -1));
        assert_eq!(c(6, 4).modulo(&c(3, 2)).unwrap(), c(0, 0));
        assert_eq!(c(1, 1).modulo(&c(0, 0)), Err(Error::DivisionByZero));
    }

    #[test]
    fn modulo_breaks_ties_to_even() {
        // 5 / 2 = 2.5, negated -2.5 rounds to -2, 5 - 4 = 1 rather than -1
        assert_eq!(c(5, 0).modulo(&c(2, 0)).unwrap(), c(1, 0));
    }

    #[test]
    fn integer_powers() {
        assert_eq!(c(1, 1).powi(2), c(0, 2));
        assert_eq!(c(1, 1).powi(0), c(1, 0));
        assert_eq!(c(2, 0).powi(10), c(1024, 0));
        assert_eq!(c(0, 1).powi(3), c(0, -1));
    }

    #[test]
    fn floats_are_taken_as_is() {
        assert_eq!(
            BigComplex::from_f64(0.5, -2.0),
            Some(BigComplex::new(dec("0.5"), dec("-2")))
        );
        assert_eq!(BigComplex::from_f64(f64::NAN, 0.0), None);
        assert_eq!(BigComplex::from_f64(0.0, f64::INFINITY), None);
    }

    #[test]
    fn equality_is_numeric_per_part() {
        let a = BigComplex::new(dec("3.00"), dec("0"));
        assert_eq!(a, BigComplex::from(3i64));
        assert_ne!(a, c(3, 1));
    }
}
