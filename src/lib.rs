//! Complex numbers over arbitrary precision decimals.
//!
//! [`BigComplex`] pairs two [`BigDecimal`](bigdecimal::BigDecimal) parts.
//! Addition, subtraction and multiplication are exact. Everything that needs
//! a root, a logarithm or a trigonometric value takes a [`Context`] that says
//! how many digits after the decimal point the result is rounded to.
//!
//! ```
//! use bigcomplex::{BigComplex, Context};
//!
//! let ctx = Context::default();
//! let z: BigComplex = "-25".parse().unwrap();
//! assert_eq!(z.sqrt(&ctx).unwrap().to_string(), "0 + 5i");
//! ```

mod complex;
mod context;
mod error;
pub mod numbers;
mod polar;
mod text;
mod trig;

pub use crate::complex::BigComplex;
pub use crate::context::{Context, DEFAULT_PRECISION, GUARD_DIGITS};
pub use crate::error::{Error, Result};
pub use crate::polar::MAX_GCD_ITERATIONS;
pub use crate::text::{format, parse};
pub use num_bigint::Sign;
