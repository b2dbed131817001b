use std::num::ParseIntError;
use thiserror::Error;

/// Failure to decode a compact request encoding into typed values.
///
/// Produced by `server::util::parse` before any structural validation runs. Carries no
/// field name; the caller wraps it into a `ValidationError` that names the field.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The value holds more comma-separated pieces than allowed.
    #[error("must contain at most {max} values, found {found}")]
    TooManyValues { max: usize, found: usize },

    /// A comma-separated piece is empty, e.g. `"1,,2"` or `""`.
    #[error("must not contain empty values")]
    EmptyValue,

    /// A piece is not a valid integer.
    #[error("'{value}' is not a valid integer: {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// A piece is not a valid `YYYY-MM-DD` calendar date.
    #[error("'{value}' is not a valid date (expected YYYY-MM-DD): {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// The JSON value has a type the encoding cannot hold, e.g. an object.
    #[error("must be {expected}")]
    UnexpectedType { expected: &'static str },
}
