// Polar form and everything built on it: phase, roots, exponential, logarithm, powers
// Also the Gaussian gcd, which only needs exact arithmetic and the magnitude.

use crate::complex::BigComplex;
use crate::context::Context;
use crate::error::{Error, Result};
use crate::numbers::{self, half, integer_digits, quotient};
use bigdecimal::BigDecimal;
use log::{debug, trace, warn};
use num_traits::{Signed, ToPrimitive, Zero};

pub const MAX_GCD_ITERATIONS: usize = 1000;

impl BigComplex {
    /// The angle of the value in `(-π, π]`, an error at zero.
    pub fn phase(&self, ctx: &Context) -> Result<BigDecimal> {
        Ok(ctx.round(&self.phase_with(ctx.working())?))
    }

    // atan2(im, re), quadrant by quadrant
    pub(crate) fn phase_with(&self, places: u64) -> Result<BigDecimal> {
        let x = self.real();
        let y = self.imaginary();
        if x.is_zero() {
            let right_angle = numbers::pi(places) * half();
            return if y.is_positive() {
                Ok(right_angle)
            } else if y.is_negative() {
                Ok(-right_angle)
            } else {
                Err(Error::UndefinedResult("phase"))
            };
        }
        let angle = numbers::atan(&quotient(y, x, places), places)?;
        if x.is_positive() {
            Ok(angle)
        } else if y.is_negative() {
            Ok(angle - numbers::pi(places))
        } else {
            Ok(angle + numbers::pi(places))
        }
    }

    /// `magnitude * (cos(phase) + i sin(phase))`.
    pub fn from_polar(magnitude: &BigDecimal, phase: &BigDecimal, ctx: &Context) -> Self {
        Self::from_polar_with(magnitude, phase, ctx.working()).round(ctx.precision())
    }

    pub(crate) fn from_polar_with(magnitude: &BigDecimal, phase: &BigDecimal, places: u64) -> Self {
        // A large magnitude scales the error of the trig values up
        let digits = places + integer_digits(magnitude);
        let re = magnitude * numbers::cos(phase, digits);
        let im = magnitude * numbers::sin(phase, digits);
        Self::new(numbers::round(&re, places), numbers::round(&im, places))
    }

    /// `(magnitude, phase)`.
    pub fn to_polar(&self, ctx: &Context) -> Result<(BigDecimal, BigDecimal)> {
        Ok((self.abs(ctx)?, self.phase(ctx)?))
    }

    /// Principal square root: the root of the magnitude at half the phase.
    pub fn sqrt(&self, ctx: &Context) -> Result<Self> {
        Ok(self.sqrt_with(ctx.working())?.round(ctx.precision()))
    }

    pub(crate) fn sqrt_with(&self, places: u64) -> Result<Self> {
        // Zero has no phase but an obvious root
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let rho = self.abs_with(places + self.leading_zeros())?;
        let magnitude = numbers::nth_root(&rho, 2, places)?;
        // The root scales the error of the phase up by its own size
        let phase = self.phase_with(places + integer_digits(&magnitude))? * half();
        Ok(Self::from_polar_with(&magnitude, &phase, places))
    }

    /// `e^z = e^re (cos(im) + i sin(im))`.
    pub fn exp(&self, ctx: &Context) -> Self {
        self.exp_with(ctx.working()).round(ctx.precision())
    }

    pub(crate) fn exp_with(&self, places: u64) -> Self {
        let factor = numbers::exp(self.real(), places);
        Self::from_polar_with(&factor, self.imaginary(), places)
    }

    /// Principal natural logarithm `ln|z| + i phase(z)`, an error at zero.
    pub fn log(&self, ctx: &Context) -> Result<Self> {
        Ok(self.log_with(ctx.working())?.round(ctx.precision()))
    }

    pub(crate) fn log_with(&self, places: u64) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::UndefinedResult("log"));
        }
        let magnitude = self.abs_with(places + self.leading_zeros())?;
        Ok(Self::new(
            numbers::ln(&magnitude, places)?,
            self.phase_with(places)?,
        ))
    }

    /// Logarithm to base ten.
    pub fn log10(&self, ctx: &Context) -> Result<Self> {
        let places = ctx.working();
        let log = self.log_with(places)?;
        let ln10 = numbers::ln(&BigDecimal::from(10), places)?;
        let re = quotient(log.real(), &ln10, places);
        let im = quotient(log.imaginary(), &ln10, places);
        Ok(Self::new(re, im).round(ctx.precision()))
    }

    /// Logarithm to a complex base, `log(z) / log(base)`.
    pub fn log_base(&self, base: &Self, ctx: &Context) -> Result<Self> {
        let places = ctx.working();
        let log = self.log_with(places)?;
        let log_base = base.log_with(places)?;
        Ok(log.divide(&log_base)?.round(ctx.precision()))
    }

    /// `self^power` on the principal branch.
    ///
    /// Anything to the power zero is one, zero to any other power is zero.
    pub fn pow(&self, power: &Self, ctx: &Context) -> Result<Self> {
        Ok(self.pow_with(power, ctx.working())?.round(ctx.precision()))
    }

    pub(crate) fn pow_with(&self, power: &Self, places: u64) -> Result<Self> {
        if power.is_zero() {
            return Ok(Self::one());
        }
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let (c, d) = (power.real(), power.imaginary());
        let zeros = self.leading_zeros();
        let mut theta = self.phase_with(places)?;
        let mut ln_rho = numbers::ln(&self.abs_with(places + zeros)?, places)?;

        // The modulus multiplies every error in ln(rho) and theta, so both
        // are redone with its integer digits and those of the power on top
        let growth = (c * &ln_rho - d * &theta)
            .to_f64()
            .filter(|v| v.is_finite() && *v > 0.0)
            .map(|v| (v / std::f64::consts::LN_10).ceil() as u64)
            .unwrap_or(0);
        let digits = places + growth + integer_digits(c) + integer_digits(d);
        if digits > places {
            trace!("pow: redoing logarithm and phase at {} digits", digits);
            theta = self.phase_with(digits)?;
            ln_rho = numbers::ln(&self.abs_with(digits + zeros)?, digits)?;
        }

        // t = rho^c e^(-d theta), angle = c theta + d ln(rho)
        let angle = c * &theta + d * &ln_rho;
        let scale = numbers::exp(&(c * &ln_rho - d * &theta), places);
        debug!("pow: modulus {} at angle {}", scale, angle);
        Ok(Self::from_polar_with(&scale, &angle, places))
    }

    /// Greatest common divisor by the Euclidean algorithm.
    ///
    /// Quotients are exact decimal quotients, not rounded to Gaussian
    /// integers, so for most inputs the first remainder is already zero and
    /// the smaller argument comes back. Inputs whose quotients do not
    /// terminate may never reach a zero remainder; after
    /// [`MAX_GCD_ITERATIONS`] steps this gives up with
    /// [`Error::Convergence`].
    ///
    /// A quotient that does not terminate is cut at the 100 significant
    /// digits of [`divide`](Self::divide), which leaves a remainder of that
    /// order. The result is then that remainder, not a Gaussian integer:
    /// `gcd(7, 3)` is `1e-99`.
    pub fn gcd(&self, other: &Self, ctx: &Context) -> Result<Self> {
        let (mut a, mut b) = (self.clone(), other.clone());
        if b.norm(ctx)? > a.norm(ctx)? {
            std::mem::swap(&mut a, &mut b);
        }
        if b.is_zero() {
            return Ok(a);
        }
        for iteration in 0..MAX_GCD_ITERATIONS {
            let q = a.divide(&b)?;
            let r = a.subtract(&q.multiply(&b));
            trace!("gcd step {}: remainder {}", iteration, r);
            if r.is_zero() {
                return Ok(b);
            }
            a = b;
            b = r;
        }
        warn!("gcd of {} and {} gave up", self, other);
        Err(Error::Convergence {
            operation: "gcd",
            iterations: MAX_GCD_ITERATIONS,
        })
    }
}
