//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Client faults (validation, media type, malformed bodies, references to unknown rows)
//! map to 4xx responses that describe the problem. Server faults map to 5xx responses
//! with an opaque message; their details are only logged.

pub mod config;
pub mod media_type;
pub mod parse;
pub mod store;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        media_type::MediaTypeError,
        store::{QueryError, WriteError},
        validation::ValidationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A request field failed normalization.
    ///
    /// Results in 400 Bad Request naming the offending field.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Request body was not declared as JSON.
    ///
    /// Results in 415 Unsupported Media Type.
    #[error(transparent)]
    MediaTypeErr(#[from] MediaTypeError),

    /// Lesson series transaction failed and was rolled back.
    ///
    /// Results in 422 Unprocessable Entity when the request referenced unknown rows,
    /// otherwise 500 Internal Server Error.
    #[error(transparent)]
    WriteErr(#[from] WriteError),

    /// Lesson listing query failed.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    QueryErr(#[from] QueryError),

    /// Database operation error from SeaORM outside of the lesson operations,
    /// e.g. connecting or migrating at startup.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body could not be decoded.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `ValidationErr` and `BadRequest`
/// - 415 Unsupported Media Type - For `MediaTypeErr`
/// - 422 Unprocessable Entity - For `WriteErr` caused by an unknown reference
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationErr(err) => {
                tracing::debug!("Validation failed: {}", err);
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto::new("validation_failed", err.to_string()).with_field(err.field())),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => {
                tracing::debug!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("bad_request", msg))).into_response()
            }
            Self::MediaTypeErr(err) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorDto::new("unsupported_media_type", err.to_string())),
            )
                .into_response(),
            Self::WriteErr(err) if err.is_unknown_reference() => {
                tracing::warn!("{}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ErrorDto::new(
                        "unknown_reference",
                        "Request references a teacher that does not exist",
                    )),
                )
                    .into_response()
            }
            Self::WriteErr(err) => InternalServerError("write_failed", err).into_response(),
            Self::QueryErr(err) => InternalServerError("query_failed", err).into_response(),
            err => InternalServerError("internal_error", err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns only the given code with a generic message to the
/// client to avoid leaking storage internals.
pub struct InternalServerError<E>(pub &'static str, pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.1);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(self.0, "Internal server error")),
        )
            .into_response()
    }
}
