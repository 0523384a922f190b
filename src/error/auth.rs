use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Session token has no record in the store, or the record is bound to a
    /// different Discord user than the one named in the request.
    ///
    /// Both cases produce the same response so a caller probing with stolen
    /// session tokens cannot distinguish them. Results in 401 Unauthorized.
    #[error("Unable to authorize user")]
    UserUnauthorized,

    /// Guild has no stored OAuth grant, meaning the bot was never authorized
    /// for it. Results in 401 Unauthorized.
    #[error("Unable to find guild")]
    GuildUnauthorized,

    /// Discord rejected the refresh token grant, so the stored session can no
    /// longer be renewed. Results in 401 Unauthorized.
    #[error("Failed to refresh access token")]
    RefreshRejected,

    /// Caller is a member of the guild but lacks the Administrator permission
    /// bit. Results in 401 Unauthorized.
    #[error("User does not have administrator permissions")]
    MissingAdministrator,

    /// Composite admin check failed while verifying the caller's session or
    /// guild permissions. Carries the underlying cause so the dashboard can
    /// show why the guarded action was rejected. Results in 401 Unauthorized.
    #[error("Invalid token or user, or insufficient guild permissions: {0}")]
    PermissionDenied(String),

    /// Composite admin check failed while verifying the target guild's OAuth
    /// grant. Results in 401 Unauthorized.
    #[error("Failed to verify guild: {0}")]
    GuildVerifyFailed(String),

    /// Interaction webhook request carried a missing or invalid Ed25519
    /// signature. Results in 401 Unauthorized, which Discord requires when
    /// validating an interactions endpoint.
    #[error("Invalid request signature")]
    InvalidSignature,
}

/// Converts authorization errors into HTTP responses.
///
/// Every variant maps to 401 Unauthorized with the variant's display message as
/// the JSON body. The message is the contract the dashboard relies on to tell
/// an expired session apart from a missing permission.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
