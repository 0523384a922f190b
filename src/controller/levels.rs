use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::admin::AdminGuard,
    model::api::{MessageDto, ModifyLevelsDto},
    service::levels::LevelsService,
    state::AppState,
};

/// Runs a bulk level operation on a guild: `reset` or `import`.
///
/// An import replaces the guild's level data wholesale with the external
/// provider's leaderboard, so a reset is implied.
///
/// # Access Control
/// - The caller named in `callerID` must hold a valid session and administer
///   the guild, and the bot must be installed there
///
/// # Returns
/// - `200 OK` - Operation completed
/// - `400 Bad Request` - Unknown operation or import source
/// - `401 Unauthorized` - Guard rejected the caller
/// - `424 Failed Dependency` - The leaderboard provider was unreachable
/// - `500 Internal Server Error` - A leaderboard page failed twice
pub async fn modify(
    State(state): State<AppState>,
    Json(payload): Json<ModifyLevelsDto>,
) -> Result<impl IntoResponse, AppError> {
    AdminGuard::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    )
    .require_admin(&payload.guild_id, &payload.caller_id, payload.token)
    .await?;

    let service = LevelsService::new(&state.db, &state.http_client, &state.leaderboard_base_url);

    service
        .modify(&payload.operation, &payload.guild_id, &payload.source)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Completed successfully".to_string(),
        }),
    ))
}
