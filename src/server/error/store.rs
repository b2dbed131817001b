use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// The lesson series transaction failed and was rolled back.
#[derive(Error, Debug)]
#[error("failed to write lesson series: {0}")]
pub struct WriteError(#[source] pub DbErr);

impl WriteError {
    /// Whether the failure was caused by a reference to a row that does not exist,
    /// such as an unknown teacher id. That is a client fault, everything else is not.
    pub fn is_unknown_reference(&self) -> bool {
        matches!(
            self.0.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        )
    }
}

/// The composed lesson read could not be executed.
#[derive(Error, Debug)]
#[error("failed to query lessons: {0}")]
pub struct QueryError(#[source] pub DbErr);
