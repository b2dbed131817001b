use thiserror::Error;

/// The request did not declare a JSON body.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MediaTypeError {
    #[error("Content-Type header is missing, expected application/json")]
    Missing,

    #[error("unsupported Content-Type '{0}', expected application/json")]
    Unsupported(String),
}
