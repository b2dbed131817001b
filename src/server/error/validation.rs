use thiserror::Error;

use crate::server::error::parse::ParseError;

/// A request field failed normalization.
///
/// Every variant names the offending field using its wire name (e.g. `lessonsPerPage`)
/// so the client can point at it. Resolved entirely before the store is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Required field is absent or `null`.
    #[error("\"{field}\" is required")]
    Missing { field: &'static str },

    /// Field decoded fine but violates a bound or constraint.
    #[error("\"{field}\" {reason}")]
    Invalid { field: &'static str, reason: String },

    /// Field could not be decoded from its compact encoding.
    #[error("\"{field}\" {source}")]
    Malformed {
        field: &'static str,
        #[source]
        source: ParseError,
    },

    /// Exactly one of two fields must be present; both or neither were.
    #[error("exactly one of \"{first}\" or \"{second}\" must be provided")]
    ExactlyOneOf {
        first: &'static str,
        second: &'static str,
    },
}

impl ValidationError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }

    /// Returns a closure wrapping a `ParseError` for the given field, for use with `map_err`.
    pub fn malformed(field: &'static str) -> impl FnOnce(ParseError) -> Self {
        move |source| Self::Malformed { field, source }
    }

    /// Wire name of the offending field. For `ExactlyOneOf` both names are joined by a comma.
    pub fn field(&self) -> String {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } | Self::Malformed { field, .. } => {
                (*field).to_string()
            }
            Self::ExactlyOneOf { first, second } => format!("{},{}", first, second),
        }
    }
}
