use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError, middleware::admin::AdminGuard, model::api::RoleRewardUpdateDto,
    service::role_reward::RoleRewardService, state::AppState,
};

/// Creates or deletes a role handed out at a level threshold.
///
/// `state` selects the direction: `true` stores the reward, updating its
/// persistence flag when it already exists, `false` deletes it.
///
/// # Access Control
/// - Caller must hold a valid session and administer the guild, and the bot
///   must be installed there
///
/// # Returns
/// - `200 OK` - Empty body, reward stored or deleted
/// - `400 Bad Request` - Required fields missing
/// - `401 Unauthorized` - Guard rejected the caller
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<RoleRewardUpdateDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.guild_id.is_empty()
        || payload.role_id.is_empty()
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

    let service = RoleRewardService::new(&state.db);

    service
        .update(
            &payload.guild_id,
            &payload.role_id,
            payload.level,
            payload.persistent,
            payload.state,
        )
        .await?;

    Ok(StatusCode::OK)
}
