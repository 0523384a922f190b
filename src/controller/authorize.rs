use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::api::{AuthorizeDto, GuildAuthorizedDto, SessionDto},
    service::authorize::AuthorizeService,
    state::AppState,
};

/// Exchanges a login authorization code for a dashboard session.
///
/// # Returns
/// - `200 OK` - Profile fields plus the session token for later requests
/// - `400 Bad Request` - No authorization code in the body
/// - `424 Failed Dependency` - Discord was unreachable
/// - `500 Internal Server Error` - Discord rejected the code
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<AuthorizeDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.code.is_empty() {
        return Err(AppError::BadRequest(
            "No authorization code specified".to_string(),
        ));
    }

    let service = AuthorizeService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    );

    let record = service.login(payload.code).await?;

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

/// Exchanges a bot-install authorization code and stores the guild's grant.
///
/// # Returns
/// - `200 OK` - The guild the bot was installed into
/// - `400 Bad Request` - No authorization code in the body
/// - `424 Failed Dependency` - Discord was unreachable
/// - `500 Internal Server Error` - Discord rejected the code or the response
///   carried no guild
pub async fn install(
    State(state): State<AppState>,
    Json(payload): Json<AuthorizeDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.code.is_empty() {
        return Err(AppError::BadRequest(
            "No authorization code specified".to_string(),
        ));
    }

    let service = AuthorizeService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    );

    let record = service.install(payload.code).await?;

    Ok((
        StatusCode::OK,
        Json(GuildAuthorizedDto {
            guild_id: record.guild_id,
        }),
    ))
}
