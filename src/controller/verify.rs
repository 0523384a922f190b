use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::api::{ConfirmPermissionDto, SessionDto, VerifiedGuildDto, VerifyGuildDto, VerifyUserDto},
    service::verify::{GuildVerificationService, PermissionService, UserVerificationService},
    state::AppState,
};

/// Verifies a dashboard session and returns its current profile fields.
///
/// The session's OAuth grant is refreshed in place when expired, so a 200
/// here means the stored access token is usable.
///
/// # Returns
/// - `200 OK` - Profile fields plus the session token
/// - `400 Bad Request` - Token or user ID missing from the body
/// - `401 Unauthorized` - Unknown session, wrong user, or failed refresh
/// - `424 Failed Dependency` - Discord was unreachable
pub async fn verify_user(
    State(state): State<AppState>,
    Json(payload): Json<VerifyUserDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.token == 0 || payload.user_id.is_empty() {
        return Err(AppError::BadRequest("Missing parameters".to_string()));
    }

    let service = UserVerificationService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    );

    let record = service.verify(payload.token, &payload.user_id).await?;

    Ok((
        StatusCode::OK,
        Json(SessionDto {
            user_id: record.user_id,
            username: record.username,
            discriminator: record.discriminator,
            avatar: record.avatar,
            token: record.id,
        }),
    ))
}

/// Verifies the bot's installation grant for a guild.
///
/// # Returns
/// - `200 OK` - The guild ID and a live access token for its grant
/// - `400 Bad Request` - Guild ID missing from the body
/// - `401 Unauthorized` - No grant stored or refresh failed
pub async fn verify_guild(
    State(state): State<AppState>,
    Json(payload): Json<VerifyGuildDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.guild_id.is_empty() {
        return Err(AppError::BadRequest("Missing parameters".to_string()));
    }

    let service =
        GuildVerificationService::new(&state.db, &state.http_client, &state.oauth_client);

    let record = service.verify(&payload.guild_id).await?;

    Ok((
        StatusCode::OK,
        Json(VerifiedGuildDto {
            guild_id: record.guild_id,
            access_token: record.access_token,
        }),
    ))
}

/// Runs the combined session, administrator and installation check.
///
/// Other services call this endpoint before acting on a guild; the dashboard
/// uses it to decide whether to show admin controls.
///
/// # Returns
/// - `200 OK` - Empty body, all legs passed
/// - `400 Bad Request` - Any field missing from the body
/// - `401 Unauthorized` - Any leg failed; the cause is in the message
pub async fn confirm_permission(
    State(state): State<AppState>,
    Json(payload): Json<ConfirmPermissionDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.user_id.is_empty() || payload.guild_id.is_empty() || payload.token == 0 {
        return Err(AppError::BadRequest("Missing parameters.".to_string()));
    }

    let service = PermissionService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    );

    service
        .confirm(&payload.guild_id, &payload.user_id, payload.token)
        .await?;

    Ok(StatusCode::OK)
}
