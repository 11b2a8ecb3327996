// Precision settings threaded through every transcendental operation

use crate::error::{Error, Result};
use crate::numbers;
use bigdecimal::BigDecimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digits after the decimal point used when nothing else is asked for.
pub const DEFAULT_PRECISION: u64 = 20;

/// Extra digits carried by intermediate results before the final rounding.
pub const GUARD_DIGITS: u64 = 10;

/// Rounding configuration for a computation.
///
/// `precision` counts digits after the decimal point. Results of
/// transcendental operations are rounded to it; intermediates carry
/// [`GUARD_DIGITS`] more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    precision: u64,
}

impl Context {
    pub fn new(precision: u64) -> Result<Self> {
        if precision == 0 {
            return Err(Error::InvalidPrecision);
        }
        Ok(Self { precision })
    }

    pub fn precision(&self) -> u64 {
        self.precision
    }

    /// Digits carried by intermediate results.
    pub fn working(&self) -> u64 {
        self.precision + GUARD_DIGITS
    }

    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        numbers::round(value, self.precision)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn zero_precision_is_rejected() {
        assert_eq!(Context::new(0), Err(Error::InvalidPrecision));
    }

    #[test]
    fn working_digits_include_guard() {
        let ctx = Context::new(5).unwrap();
        assert_eq!(ctx.working(), 15);
        assert_eq!(Context::default().precision(), DEFAULT_PRECISION);
    }

    #[test]
    fn rounds_to_precision() {
        let ctx = Context::new(3).unwrap();
        let value = BigDecimal::from_str("1.23456").unwrap();
        assert_eq!(ctx.round(&value), BigDecimal::from_str("1.235").unwrap());
    }
}
