use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    middleware::admin::AdminGuard,
    model::api::{CommandPermissionsDto, MessageDto, RegisterCommandDto, RemoveCommandDto},
    service::interaction::InteractionService,
    state::AppState,
};

/// Registers a slash command from the template catalog in a guild.
///
/// Creates the command upstream on first registration and updates it in place
/// on repeats, then records the assignment in the command index.
///
/// # Access Control
/// - Caller must hold a valid session and administer the guild, and the bot
///   must be installed there
///
/// # Returns
/// - `200 OK` - Command registered and indexed
/// - `400 Bad Request` - Name or guild missing, or an unknown command name
/// - `401 Unauthorized` - Guard rejected the caller
/// - `500 Internal Server Error` - Discord rejected the registration; the
///   message carries the upstream status and body
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.is_empty() || payload.guild_id.is_empty() {
        return Err(AppError::BadRequest("Missing parameters.".to_string()));
    }

    AdminGuard::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    )
    .require_admin(&payload.guild_id, &payload.user_id, payload.token)
    .await?;

    let service = InteractionService::new(
        &state.db,
        &state.http_client,
        &state.discord_api_base_url,
        &state.discord_client_id,
        &state.discord_bot_token,
    );

    service
        .register(&payload.guild_id, &payload.name, payload.default_permission)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully added interaction.".to_string(),
        }),
    ))
}

/// Removes a registered slash command from a guild.
///
/// # Access Control
/// - Same guard as registration
///
/// # Returns
/// - `200 OK` - Command deleted upstream and evicted from the index
/// - `400 Bad Request` - Name or guild missing, or no registered command
/// - `401 Unauthorized` - Guard rejected the caller
/// - `500 Internal Server Error` - Discord refused the deletion
pub async fn remove(
    State(state): State<AppState>,
    Json(payload): Json<RemoveCommandDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.is_empty() || payload.guild_id.is_empty() {
        return Err(AppError::BadRequest("Missing parameters.".to_string()));
    }

    AdminGuard::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    )
    .require_admin(&payload.guild_id, &payload.user_id, payload.token)
    .await?;

    let service = InteractionService::new(
        &state.db,
        &state.http_client,
        &state.discord_api_base_url,
        &state.discord_client_id,
        &state.discord_bot_token,
    );

    service.remove(&payload.guild_id, &payload.name).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully removed interaction.".to_string(),
        }),
    ))
}

/// Overwrites the permission list of a registered slash command.
///
/// The full list replaces whatever Discord currently holds for the command.
///
/// # Access Control
/// - Same guard as registration
///
/// # Returns
/// - `200 OK` - Permissions replaced upstream
/// - `400 Bad Request` - Name or guild missing, or no registered command
/// - `401 Unauthorized` - Guard rejected the caller
/// - `500 Internal Server Error` - Discord refused the overwrite
pub async fn update_permissions(
    State(state): State<AppState>,
    Json(payload): Json<CommandPermissionsDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.is_empty() || payload.guild_id.is_empty() {
        return Err(AppError::BadRequest("Missing parameters.".to_string()));
    }

    AdminGuard::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    )
    .require_admin(&payload.guild_id, &payload.user_id, payload.token)
    .await?;

    let service = InteractionService::new(
        &state.db,
        &state.http_client,
        &state.discord_api_base_url,
        &state.discord_client_id,
        &state.discord_bot_token,
    );

    service
        .set_permissions(&payload.guild_id, &payload.name, &payload.permissions)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Successfully modified permissions of interaction.".to_string(),
        }),
    ))
}
