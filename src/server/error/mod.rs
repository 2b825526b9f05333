//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum serves as the single
//! error type crossing the data, service, and controller layers and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database error raised outside of a repository call (connecting, migrating).
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Failure to bind or serve the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A business rule rejected the input.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    Validation(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// A repository statement failed.
    ///
    /// Carries the repository's description of the failed operation along with the
    /// underlying database error. Results in 500 Internal Server Error; only a generic
    /// message reaches the client.
    #[error("{context}: {source}")]
    Storage {
        context: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// The request body could not be decoded as the expected JSON shape.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),

    /// A path parameter could not be parsed.
    #[error(transparent)]
    PathRejection(#[from] PathRejection),

    /// A query parameter was missing or could not be parsed.
    #[error(transparent)]
    QueryRejection(#[from] QueryRejection),
}

impl AppError {
    /// Wraps a database error with a description of the failed operation.
    pub fn storage(context: impl Into<String>, source: sea_orm::DbErr) -> Self {
        Self::Storage {
            context: context.into(),
            source,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Every response carries an `ErrorDto` body.
///
/// # Returns
/// - 400 Bad Request - For `Validation`
/// - 404 Not Found - For `NotFound`
/// - Extractor status (4xx) - For JSON body, path, and query rejections
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::JsonRejection(rejection) => {
                error_response(rejection.status(), rejection.body_text())
            }
            Self::PathRejection(rejection) => {
                error_response(rejection.status(), rejection.body_text())
            }
            Self::QueryRejection(rejection) => {
                error_response(rejection.status(), rejection.body_text())
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error_description: String) -> Response {
    (status, Json(ErrorDto { error_description })).into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}
