use axum::http::{header, HeaderValue, Method};
use migration::{Migrator, MigratorTrait};
use oauth2::{AuthUrl, Client, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tower_http::cors::CorsLayer;

use crate::{
    config::{Config, DISCORD_AUTH_URL},
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the database and applies any pending migrations.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared HTTP client used for all Discord and leaderboard calls.
///
/// Redirects are disabled; the OAuth token exchange must never follow one.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client pointed at Discord's authorization and token
/// endpoints, with the dashboard's `/authorization` callback as redirect URI.
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let client = Client::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(
            AuthUrl::new(DISCORD_AUTH_URL.to_string())
                .map_err(|_| ConfigError::InvalidUrl("DISCORD_AUTH_URL".to_string()))?,
        )
        .set_token_uri(
            TokenUrl::new(format!("{}/oauth2/token", config.discord_api_base_url))
                .map_err(|_| ConfigError::InvalidUrl("DISCORD_API_BASE_URL".to_string()))?,
        )
        .set_redirect_uri(
            RedirectUrl::new(format!("{}/authorization", config.discord_redirect_url))
                .map_err(|_| ConfigError::InvalidUrl("DISCORD_REDIRECT_URL".to_string()))?,
        );

    Ok(client)
}

/// Builds the CORS layer allowing the configured dashboard origins.
pub fn setup_cors(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE])
}
