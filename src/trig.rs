// Trigonometric and hyperbolic functions, and their inverses through the logarithm

use crate::complex::BigComplex;
use crate::context::Context;
use crate::error::Result;
use crate::numbers::{self, half, integer_digits};

impl BigComplex {
    /// `sin(a + bi) = sin(a) cosh(b) + i cos(a) sinh(b)`
    pub fn sin(&self, ctx: &Context) -> Self {
        self.sin_with(ctx.working()).round(ctx.precision())
    }

    fn sin_with(&self, places: u64) -> Self {
        let (a, b) = (self.real(), self.imaginary());
        let cosh = numbers::cosh(b, places);
        let sinh = numbers::sinh(b, places);
        let digits = places + integer_digits(&cosh);
        Self::new(
            numbers::round(&(numbers::sin(a, digits) * &cosh), places),
            numbers::round(&(numbers::cos(a, digits) * &sinh), places),
        )
    }

    /// `cos(a + bi) = cos(a) cosh(b) - i sin(a) sinh(b)`
    pub fn cos(&self, ctx: &Context) -> Self {
        self.cos_with(ctx.working()).round(ctx.precision())
    }

    fn cos_with(&self, places: u64) -> Self {
        let (a, b) = (self.real(), self.imaginary());
        let cosh = numbers::cosh(b, places);
        let sinh = numbers::sinh(b, places);
        let digits = places + integer_digits(&cosh);
        Self::new(
            numbers::round(&(numbers::cos(a, digits) * &cosh), places),
            numbers::round(&-(numbers::sin(a, digits) * &sinh), places),
        )
    }

    /// `sin / cos`, a division by zero where the cosine rounds to zero.
    pub fn tan(&self, ctx: &Context) -> Result<Self> {
        let places = ctx.working();
        let ratio = self.sin_with(places).divide(&self.cos_with(places))?;
        Ok(ratio.round(ctx.precision()))
    }

    /// `sinh(a + bi) = sinh(a) cos(b) + i cosh(a) sin(b)`
    pub fn sinh(&self, ctx: &Context) -> Self {
        self.sinh_with(ctx.working()).round(ctx.precision())
    }

    fn sinh_with(&self, places: u64) -> Self {
        let (a, b) = (self.real(), self.imaginary());
        let cosh = numbers::cosh(a, places);
        let sinh = numbers::sinh(a, places);
        let digits = places + integer_digits(&cosh);
        Self::new(
            numbers::round(&(&sinh * numbers::cos(b, digits)), places),
            numbers::round(&(&cosh * numbers::sin(b, digits)), places),
        )
    }

    /// `cosh(a + bi) = cosh(a) cos(b) + i sinh(a) sin(b)`
    pub fn cosh(&self, ctx: &Context) -> Self {
        self.cosh_with(ctx.working()).round(ctx.precision())
    }

    fn cosh_with(&self, places: u64) -> Self {
        let (a, b) = (self.real(), self.imaginary());
        let cosh = numbers::cosh(a, places);
        let sinh = numbers::sinh(a, places);
        let digits = places + integer_digits(&cosh);
        Self::new(
            numbers::round(&(&cosh * numbers::cos(b, digits)), places),
            numbers::round(&(&sinh * numbers::sin(b, digits)), places),
        )
    }

    /// `sinh / cosh`
    pub fn tanh(&self, ctx: &Context) -> Result<Self> {
        let places = ctx.working();
        let ratio = self.sinh_with(places).divide(&self.cosh_with(places))?;
        Ok(ratio.round(ctx.precision()))
    }

    /// `asin(z) = -i log(iz + sqrt(1 - z^2))`
    pub fn asin(&self, ctx: &Context) -> Result<Self> {
        let places = ctx.working();
        let root = Self::one().subtract(&self.multiply(self)).sqrt_with(places)?;
        let log = self.times_i().add(&root).log_with(places)?;
        Ok(log.times_i().negate().round(ctx.precision()))
    }

    /// `acos(z) = -i log(z + i sqrt(1 - z^2))`
    pub fn acos(&self, ctx: &Context) -> Result<Self> {
        let places = ctx.working();
        let root = Self::one().subtract(&self.multiply(self)).sqrt_with(places)?;
        let log = self.add(&root.times_i()).log_with(places)?;
        Ok(log.times_i().negate().round(ctx.precision()))
    }

    /// `atan(z) = i/2 (log(1 - iz) - log(1 + iz))`, undefined at `±i`.
    pub fn atan(&self, ctx: &Context) -> Result<Self> {
        let places = ctx.working();
        let one = Self::one();
        let iz = self.times_i();
        let left = one.subtract(&iz).log_with(places)?;
        let right = one.add(&iz).log_with(places)?;
        Ok(left
            .subtract(&right)
            .times_i()
            .scale(&half())
            .round(ctx.precision()))
    }
}
