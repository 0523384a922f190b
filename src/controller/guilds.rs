use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError, model::api::ListGuildsDto, service::guilds::GuildListingService,
    state::AppState,
};

/// Lists the caller's guilds, flagging the ones the bot is a member of.
///
/// The session's grant is refreshed and retried once when Discord turns the
/// stored access token away.
///
/// # Returns
/// - `200 OK` - Guild entries with their onboarding flag; may be empty
/// - `400 Bad Request` - Token or user ID missing from the query
/// - `401 Unauthorized` - Unknown session, wrong user, or failed refresh
/// - `424 Failed Dependency` - Discord was unreachable
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListGuildsDto>,
) -> Result<impl IntoResponse, AppError> {
    if params.token == 0 || params.user_id.is_empty() {
        return Err(AppError::BadRequest("Missing parameters".to_string()));
    }

    let service = GuildListingService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.discord_api_base_url,
    );

    let guilds = service.list(params.token, &params.user_id).await?;

    Ok((StatusCode::OK, Json(guilds)))
}
