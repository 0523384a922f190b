use crate::error::{config::ConfigError, AppError};

pub const DISCORD_AUTH_URL: &str = "https://discord.com/oauth2/authorize";
pub const DISCORD_API_BASE_URL: &str = "https://discord.com/api";
pub const LEADERBOARD_BASE_URL: &str = "https://mee6.xyz/api/plugins/levels/leaderboard";

/// Application configuration loaded from environment variables.
///
/// Upstream base URLs default to the public Discord and MEE6 endpoints and can
/// be overridden for local development.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub discord_client_id: String,
    pub discord_client_secret: String,
    pub discord_redirect_url: String,
    pub discord_bot_token: String,
    pub discord_public_key: String,
    pub allowed_origins: Vec<String>,
    pub discord_api_base_url: String,
    pub leaderboard_base_url: String,
    pub responder_url: Option<String>,
    pub listen_addr: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingEnvVar` naming the first required variable
    /// that is not set.
    pub fn from_env() -> Result<Self, AppError> {
        // Origins are separated by "||" since URLs can contain commas.
        let allowed_origins = std::env::var("ALLOWED_ORIGINS")
            .map_err(|_| ConfigError::MissingEnvVar("ALLOWED_ORIGINS".to_string()))?
            .split("||")
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            discord_client_id: std::env::var("DISCORD_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_ID".to_string()))?,
            discord_client_secret: std::env::var("DISCORD_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_CLIENT_SECRET".to_string()))?,
            discord_redirect_url: std::env::var("DISCORD_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_REDIRECT_URL".to_string()))?,
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            discord_public_key: std::env::var("DISCORD_PUBLIC_KEY")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_PUBLIC_KEY".to_string()))?,
            allowed_origins,
            discord_api_base_url: std::env::var("DISCORD_API_BASE_URL")
                .unwrap_or_else(|_| DISCORD_API_BASE_URL.to_string()),
            leaderboard_base_url: std::env::var("LEADERBOARD_BASE_URL")
                .unwrap_or_else(|_| LEADERBOARD_BASE_URL.to_string()),
            responder_url: std::env::var("RESPONDER_URL").ok(),
            listen_addr: format!(
                "0.0.0.0:{}",
                std::env::var("PORT").unwrap_or_else(|_| "8080".to_string())
            ),
        })
    }
}
