// Holds all the logic for the infinite precision reals the complex type is built on.
// BigDecimal only gives exact +, -, * so roots, logarithms and the trig family live here.
// Every function takes `places`, the digits after the decimal point of its result.

use crate::error::{Error, Result};
use bigdecimal::BigDecimal;
use log::{trace, warn};
use num_bigint::BigInt;
use num_traits::{One, Signed, ToPrimitive, Zero};

// Intermediate digits carried inside a single primitive
const GUARD: u64 = 10;
const MAX_NEWTON_ITERATIONS: usize = 500;

pub(crate) fn ten_pow(n: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u32), n as usize)
}

fn small(n: i64) -> BigDecimal {
    BigDecimal::from(n)
}

pub(crate) fn half() -> BigDecimal {
    BigDecimal::new(BigInt::from(5), 1)
}

/// `10^-places`
pub fn epsilon(places: u64) -> BigDecimal {
    BigDecimal::new(BigInt::one(), places as i64)
}

// Power of ten of the leading digit: 0 for [1, 10), -1 for [0.1, 1)
pub(crate) fn magnitude(x: &BigDecimal) -> i64 {
    let (int, scale) = x.as_bigint_and_exponent();
    int.abs().to_string().len() as i64 - 1 - scale
}

/// Digits in front of the decimal point, zero when `|x| < 1`.
pub(crate) fn integer_digits(x: &BigDecimal) -> u64 {
    if x.is_zero() {
        return 0;
    }
    (magnitude(x) + 1).max(0) as u64
}

/// Rounds half away from zero to `places` fractional digits.
pub fn round(x: &BigDecimal, places: u64) -> BigDecimal {
    let (int, scale) = x.as_bigint_and_exponent();
    let places = places as i64;
    if scale <= places {
        return x.clone();
    }
    let divisor = ten_pow((scale - places) as u64);
    let mut quotient = &int / &divisor;
    let remainder = &int % &divisor;
    if remainder.abs() * BigInt::from(2) >= divisor {
        if int.is_negative() {
            quotient -= BigInt::one();
        } else {
            quotient += BigInt::one();
        }
    }
    BigDecimal::new(quotient, places)
}

/// Nearest integer, ties going to the even neighbour.
pub fn round_half_even(x: &BigDecimal) -> BigDecimal {
    let (int, scale) = x.as_bigint_and_exponent();
    if scale <= 0 {
        return x.clone();
    }
    let divisor = ten_pow(scale as u64);
    let mut quotient = &int / &divisor;
    let twice = (&int % &divisor).abs() * BigInt::from(2);
    let odd = !(&quotient % BigInt::from(2)).is_zero();
    if twice > divisor || (twice == divisor && odd) {
        if int.is_negative() {
            quotient -= BigInt::one();
        } else {
            quotient += BigInt::one();
        }
    }
    BigDecimal::new(quotient, 0)
}

// a / b to `places` digits. The caller guarantees b != 0.
pub(crate) fn quotient(a: &BigDecimal, b: &BigDecimal, places: u64) -> BigDecimal {
    let (a_int, a_scale) = a.as_bigint_and_exponent();
    let (b_int, b_scale) = b.as_bigint_and_exponent();
    // One digit past `places` so the final rounding sees it
    let target = places as i64 + 1;
    let shift = target - a_scale + b_scale;
    let q = if shift >= 0 {
        a_int * ten_pow(shift as u64) / b_int
    } else {
        a_int / (b_int * ten_pow((-shift) as u64))
    };
    round(&BigDecimal::new(q, target), places)
}

pub fn div(a: &BigDecimal, b: &BigDecimal, places: u64) -> Result<BigDecimal> {
    if b.is_zero() {
        return Err(Error::DivisionByZero);
    }
    Ok(quotient(a, b, places))
}

fn pow_exact(x: &BigDecimal, n: u32) -> BigDecimal {
    let mut result = BigDecimal::one();
    for _ in 0..n {
        result = result * x;
    }
    result
}

/// The real `n`-th root of `x`.
///
/// Odd roots of negative numbers are negative; even roots of negative
/// numbers and the zeroth root are domain errors.
pub fn nth_root(x: &BigDecimal, n: u32, places: u64) -> Result<BigDecimal> {
    if n == 0 {
        return Err(Error::domain("nth_root", "a zeroth root"));
    }
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    if x.is_negative() {
        if n % 2 == 0 {
            return Err(Error::domain("nth_root", format!("an even root of {}", x)));
        }
        return nth_root(&-x, n, places).map(|root| -root);
    }
    if n == 1 {
        return Ok(round(x, places));
    }

    // Shift x by a multiple of n decimal places so that its root is at least
    // one, then undo the shift exactly on the root.
    let (int, scale) = x.as_bigint_and_exponent();
    let mag = magnitude(x);
    let degree = n as i64;
    let shift = if mag < 0 { (-mag + degree - 1) / degree } else { 0 };
    let scaled = BigDecimal::new(int, scale - shift * degree);

    let root = newton_root(&scaled, n, places + GUARD)?;
    let (root_int, root_scale) = root.as_bigint_and_exponent();
    Ok(round(&BigDecimal::new(root_int, root_scale + shift), places))
}

// Newton iteration y' = ((n - 1) y + x / y^(n - 1)) / n for x >= 1
fn newton_root(x: &BigDecimal, n: u32, places: u64) -> Result<BigDecimal> {
    let degree = BigDecimal::from(n as u64);
    let lower = BigDecimal::from((n - 1) as u64);
    let tolerance = epsilon(places - 2);
    let mut y = root_estimate(x, n);
    for iteration in 0..MAX_NEWTON_ITERATIONS {
        let power = pow_exact(&y, n - 1);
        let step = &lower * &y + quotient(x, &power, places);
        let next = quotient(&step, &degree, places);
        if (&next - &y).abs() <= tolerance {
            trace!("root of degree {} settled after {} iterations", n, iteration + 1);
            return Ok(next);
        }
        y = next;
    }
    warn!("root of degree {} of {} did not settle", n, x);
    Err(Error::Convergence {
        operation: "nth_root",
        iterations: MAX_NEWTON_ITERATIONS,
    })
}

// Starting point from the leading digits in floating point, at least 1
fn root_estimate(x: &BigDecimal, n: u32) -> BigDecimal {
    let (int, _) = x.as_bigint_and_exponent();
    let digits = int.abs().to_string();
    let lead: f64 = format!("{}.{}", &digits[..1], &digits[1..digits.len().min(17)])
        .parse()
        .unwrap_or(1.0);
    let degree = n as i64;
    let mag = magnitude(x);
    let whole = mag.div_euclid(degree);
    let rest = mag.rem_euclid(degree);
    let estimate = ((lead.ln() + rest as f64 * std::f64::consts::LN_10) / n as f64).exp();
    let mantissa = (estimate * 1e15).round() as i64;
    BigDecimal::new(BigInt::from(mantissa.max(1)), 15 - whole)
}

/// `e^x`.
pub fn exp(x: &BigDecimal, places: u64) -> BigDecimal {
    if x.is_zero() {
        return BigDecimal::one();
    }
    // exp(x) = exp(x / 2^k)^(2^k) with |x / 2^k| <= 1/2
    let half = half();
    let mut reduced = x.clone();
    let mut halvings = 0u64;
    while reduced.abs() > half {
        reduced = &reduced * &half;
        halvings += 1;
    }
    // Squaring multiplies the error, a large result needs its integer digits too
    let growth = x
        .to_f64()
        .filter(|v| *v > 0.0)
        .map(|v| (v / std::f64::consts::LN_10).ceil() as u64)
        .unwrap_or(0);
    let work = places + GUARD + halvings + growth;
    let reduced = round(&reduced, work);

    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    for k in 1u64.. {
        term = quotient(&(&term * &reduced), &BigDecimal::from(k), work);
        if term.is_zero() {
            break;
        }
        sum = sum + &term;
    }
    for _ in 0..halvings {
        sum = round(&(&sum * &sum), work);
    }
    round(&sum, places)
}

/// Euler's number.
pub fn e(places: u64) -> BigDecimal {
    exp(&BigDecimal::one(), places)
}

// sum of z^(2k+1) / (2k+1), for |z| well below one
fn atanh(z: &BigDecimal, places: u64) -> BigDecimal {
    let square = round(&(z * z), places);
    let mut power = z.clone();
    let mut sum = z.clone();
    for k in 1u64.. {
        power = round(&(&power * &square), places);
        let term = quotient(&power, &BigDecimal::from(2 * k + 1), places);
        if term.is_zero() {
            break;
        }
        sum = sum + term;
    }
    sum
}

fn ln2(places: u64) -> BigDecimal {
    let work = places + GUARD;
    let third = quotient(&BigDecimal::one(), &small(3), work);
    round(&(atanh(&third, work) * small(2)), places)
}

/// Natural logarithm, defined for `x > 0`.
pub fn ln(x: &BigDecimal, places: u64) -> Result<BigDecimal> {
    if !x.is_positive() {
        return Err(Error::domain("ln", x));
    }
    let one = BigDecimal::one();
    if *x == one {
        return Ok(BigDecimal::zero());
    }
    let work = places + GUARD;

    // x = y * 2^twos with y in [0.75, 1.5]; both scalings are exact
    let two = small(2);
    let half = half();
    let upper = BigDecimal::new(BigInt::from(15), 1);
    let lower = BigDecimal::new(BigInt::from(75), 2);
    let mut reduced = x.clone();
    let mut twos: i64 = 0;
    while reduced > upper {
        reduced = &reduced * &half;
        twos += 1;
    }
    while reduced < lower {
        reduced = &reduced * &two;
        twos -= 1;
    }

    // ln(y) = 2 atanh((y - 1) / (y + 1))
    let ratio = quotient(&(&reduced - &one), &(&reduced + &one), work);
    let mut result = atanh(&ratio, work) * &two;
    if twos != 0 {
        let count = BigDecimal::from(twos);
        let log_two = ln2(work + integer_digits(&count));
        result = result + log_two * count;
    }
    Ok(round(&result, places))
}

// atan(1/m) = sum of (-1)^k / ((2k+1) m^(2k+1))
fn arctan_inverse(m: u64, places: u64) -> BigDecimal {
    let square = BigDecimal::from(m * m);
    let mut power = quotient(&BigDecimal::one(), &BigDecimal::from(m), places);
    let mut sum = power.clone();
    for k in 1u64.. {
        power = quotient(&power, &square, places);
        let term = quotient(&power, &BigDecimal::from(2 * k + 1), places);
        if term.is_zero() {
            break;
        }
        sum = if k % 2 == 1 { sum - term } else { sum + term };
    }
    sum
}

/// π by Machin's formula.
pub fn pi(places: u64) -> BigDecimal {
    let work = places + GUARD;
    let pi = arctan_inverse(5, work) * small(16) - arctan_inverse(239, work) * small(4);
    round(&pi, places)
}

// x - k * 2π with k the nearest whole number of turns
fn reduce_angle(x: &BigDecimal, places: u64) -> BigDecimal {
    let digits = integer_digits(x);
    if digits == 0 {
        return x.clone();
    }
    let two_pi = pi(places + digits) * small(2);
    let turns = quotient(x, &two_pi, 0);
    round(&(x - turns * two_pi), places)
}

pub fn sin(x: &BigDecimal, places: u64) -> BigDecimal {
    let work = places + GUARD;
    let angle = round(&reduce_angle(x, work), work);
    let square = round(&(&angle * &angle), work);
    let mut term = angle.clone();
    let mut sum = angle;
    for k in 1u64.. {
        let divisor = BigDecimal::from((2 * k) * (2 * k + 1));
        term = -quotient(&(&term * &square), &divisor, work);
        if term.is_zero() {
            break;
        }
        sum = sum + &term;
    }
    round(&sum, places)
}

pub fn cos(x: &BigDecimal, places: u64) -> BigDecimal {
    let work = places + GUARD;
    let angle = round(&reduce_angle(x, work), work);
    let square = round(&(&angle * &angle), work);
    let mut term = BigDecimal::one();
    let mut sum = BigDecimal::one();
    for k in 1u64.. {
        let divisor = BigDecimal::from((2 * k - 1) * (2 * k));
        term = -quotient(&(&term * &square), &divisor, work);
        if term.is_zero() {
            break;
        }
        sum = sum + &term;
    }
    round(&sum, places)
}

pub fn sinh(x: &BigDecimal, places: u64) -> BigDecimal {
    let work = places + GUARD;
    let difference = exp(x, work) - exp(&-x, work);
    round(&(difference * half()), places)
}

pub fn cosh(x: &BigDecimal, places: u64) -> BigDecimal {
    let work = places + GUARD;
    let sum = exp(x, work) + exp(&-x, work);
    round(&(sum * half()), places)
}

/// Real arctangent, in `(-π/2, π/2)`.
pub fn atan(x: &BigDecimal, places: u64) -> Result<BigDecimal> {
    if x.is_zero() {
        return Ok(BigDecimal::zero());
    }
    if x.is_negative() {
        return atan(&-x, places).map(|angle| -angle);
    }
    let work = places + GUARD;
    let one = BigDecimal::one();
    if *x > one {
        // atan(x) = π/2 - atan(1/x)
        let inverse = quotient(&one, x, work);
        let complement = atan(&inverse, work)?;
        return Ok(round(&(pi(work) * half() - complement), places));
    }

    // atan(x) = 2 atan(x / (1 + sqrt(1 + x^2))), at most twice for x <= 1
    let limit = BigDecimal::new(BigInt::from(25), 2);
    let mut reduced = round(x, work);
    let mut halvings = 0u32;
    while reduced > limit {
        let root = nth_root(&(&one + &reduced * &reduced), 2, work)?;
        reduced = quotient(&reduced, &(&one + root), work);
        halvings += 1;
    }

    let square = round(&(&reduced * &reduced), work);
    let mut power = reduced.clone();
    let mut sum = reduced;
    for k in 1u64.. {
        power = -round(&(&power * &square), work);
        let term = quotient(&power, &BigDecimal::from(2 * k + 1), work);
        if term.is_zero() {
            break;
        }
        sum = sum + term;
    }
    let doubling = BigDecimal::from(1u64 << halvings);
    Ok(round(&(sum * doubling), places))
}
