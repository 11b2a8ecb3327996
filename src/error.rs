// Every way a complex computation can fail

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The text given to the parser is not a complex literal.
    #[error("invalid complex literal {input:?}: {reason}")]
    Format { input: String, reason: String },

    #[error("division by zero")]
    DivisionByZero,

    /// The operation has no value at the origin (phase, logarithm).
    #[error("{0} is undefined at zero")]
    UndefinedResult(&'static str),

    /// An iterative algorithm hit its iteration cap.
    #[error("{operation} did not converge after {iterations} iterations")]
    Convergence {
        operation: &'static str,
        iterations: usize,
    },

    /// A real primitive was asked for a value outside its domain.
    #[error("{operation} is undefined for {value}")]
    Domain {
        operation: &'static str,
        value: String,
    },

    #[error("precision must be at least one digit")]
    InvalidPrecision,
}

impl Error {
    pub(crate) fn format(input: &str, reason: impl Into<String>) -> Self {
        Error::Format {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn domain(operation: &'static str, value: impl ToString) -> Self {
        Error::Domain {
            operation,
            value: value.to_string(),
        }
    }
}
