use thiserror::Error;

/// Errors raised by vector construction and the list adapter.
///
/// Reading a cell that holds no value is not an error: it yields `0.0`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("invalid configuration: {parameter} = {value}")]
    InvalidConfiguration {
        parameter: &'static str,
        value: String,
    },

    #[error("unsupported operation `{operation}`, use `{replacement}` instead")]
    UnsupportedOperation {
        operation: &'static str,
        replacement: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, VectorError>;

impl VectorError {
    pub(crate) fn invalid(parameter: &'static str, value: impl ToString) -> Self {
        Self::InvalidConfiguration {
            parameter,
            value: value.to_string(),
        }
    }

    pub(crate) fn unsupported(operation: &'static str, replacement: &'static str) -> Self {
        Self::UnsupportedOperation {
            operation,
            replacement,
        }
    }
}
