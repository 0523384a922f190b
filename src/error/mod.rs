//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Authorization errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
///
/// Error responses carry a human-readable message in the body so that the dashboard
/// can display the failure to the operator. Details are additionally logged
/// server-side for diagnostics.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    ///
    /// Always results in 500 Internal Server Error as configuration issues
    /// prevent normal application operation.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for status code mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP transport error from reqwest while calling Discord.
    ///
    /// Results in 424 Failed Dependency since the request never produced a
    /// usable upstream response.
    #[error("Discord request failed: {0}")]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error while binding or serving the HTTP listener.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Upstream dependency failure with a custom message.
    ///
    /// Results in 424 Failed Dependency. Used when an upstream call fails at
    /// the transport level through a client that does not surface a plain
    /// `reqwest::Error`, such as the OAuth token exchange.
    ///
    /// # Fields
    /// - Message describing which upstream call failed
    #[error("{0}")]
    FailedDependency(String),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged and also
    /// returned to the client, as the dashboard relays it to guild admins
    /// diagnosing failed command registrations and imports.
    ///
    /// # Fields
    /// - Detailed error message
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and response body.
/// Authorization errors delegate to their own response handling, while other errors
/// use standard mappings. Every response body carries the error message as JSON.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 424 Failed Dependency - For `ReqwestErr` and `FailedDependency` variants
/// - 500 Internal Server Error - For all other error types (DbErr, ConfigErr, etc.)
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::ReqwestErr(err) => {
                tracing::error!("Discord request failed: {}", err);
                (
                    StatusCode::FAILED_DEPENDENCY,
                    Json(ErrorDto {
                        error: format!("Discord request failed: {}", err),
                    }),
                )
                    .into_response()
            }
            Self::FailedDependency(msg) => {
                tracing::error!("Upstream dependency failed: {}", msg);
                (StatusCode::FAILED_DEPENDENCY, Json(ErrorDto { error: msg })).into_response()
            }
            err => {
                tracing::error!("Internal error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
