use oauth2::{
    basic::{BasicErrorResponseType, BasicTokenType},
    Client, EndpointNotSet, EndpointSet, RevocationErrorResponseType, StandardErrorResponse,
    StandardRevocableToken, StandardTokenIntrospectionResponse, StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::{config::Config, model::discord::DiscordTokenFields};

/// OAuth2 client configured with Discord's authorization and token endpoints.
///
/// The token response is extended with [`DiscordTokenFields`] because Discord
/// attaches a non-standard `guild` object when a code was granted through the
/// bot-install flow.
pub type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<DiscordTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<DiscordTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Shared application state available to all request handlers.
///
/// Cloned per request by axum; every field is either a cheap handle or an
/// immutable configuration string.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub http_client: reqwest::Client,
    pub oauth_client: OAuth2Client,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_bot_token: String,
    pub discord_public_key: String,
    pub discord_api_base_url: String,
    pub leaderboard_base_url: String,
    pub responder_url: Option<String>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        config: &Config,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_client_id: config.discord_client_id.clone(),
            discord_client_secret: config.discord_client_secret.clone(),
            discord_bot_token: config.discord_bot_token.clone(),
            discord_public_key: config.discord_public_key.clone(),
            discord_api_base_url: config.discord_api_base_url.clone(),
            leaderboard_base_url: config.leaderboard_base_url.clone(),
            responder_url: config.responder_url.clone(),
        }
    }
}
