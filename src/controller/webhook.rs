use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{error::AppError, service::webhook::WebhookService, state::AppState};

/// Receives interaction deliveries from Discord.
///
/// Discord signs every delivery; an unverifiable signature must be turned
/// away with a 401 or Discord rejects the endpoint during validation.
///
/// # Returns
/// - `200 OK` - Callback body for pings and commands, empty otherwise
/// - `401 Unauthorized` - Signature did not verify
/// - `500 Internal Server Error` - Verified body was not valid JSON
pub async fn interactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let signature = header_str(&headers, "X-Signature-Ed25519");
    let timestamp = header_str(&headers, "X-Signature-Timestamp");

    let service = WebhookService::new(
        &state.http_client,
        &state.discord_public_key,
        &state.discord_client_secret,
        state.responder_url.as_deref(),
    );

    service.verify_signature(signature, timestamp, &body)?;

    let interaction: serde_json::Value = serde_json::from_slice(&body).map_err(|err| {
        AppError::InternalError(format!("Failed to decode request body: {}", err))
    })?;

    match service.dispatch(interaction) {
        Some(callback) => Ok((StatusCode::OK, Json(callback)).into_response()),
        None => Ok(StatusCode::OK.into_response()),
    }
}

/// A missing or non-ASCII header reads as empty, which fails verification the
/// same way a wrong value does.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}
