use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError, middleware::admin::AdminGuard, model::api::BlocklistUpdateDto,
    service::blocklist::BlocklistService, state::AppState,
};

/// Adds a channel to or removes it from one of a guild's blocklists.
///
/// # Access Control
/// - Caller must hold a valid session and administer the guild, and the bot
///   must be installed there
///
/// # Returns
/// - `200 OK` - Empty body, entry stored
/// - `400 Bad Request` - Required fields missing or an unknown list type
/// - `401 Unauthorized` - Guard rejected the caller
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<BlocklistUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.guild_id.is_empty()
        || payload.channel_id.is_empty()
        || payload.token == 0
        || payload.user_id.is_empty()
    {
        return Err(AppError::BadRequest("Missing parameters".to_string()));
    }

    AdminGuard::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    )
    .require_admin(&payload.guild_id, &payload.user_id, payload.token)
    .await?;

    let service = BlocklistService::new(&state.db);

    service
        .update(
            &payload.guild_id,
            &payload.channel_id,
            &payload.list_type,
            payload.state,
        )
        .await?;

    Ok(StatusCode::OK)
}
