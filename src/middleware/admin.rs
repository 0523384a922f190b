use sea_orm::DatabaseConnection;

use crate::{error::AppError, service::verify::PermissionService, state::OAuth2Client};

/// Guard for endpoints that change a guild's configuration.
///
/// Every mutating endpoint carries the caller's session token and user ID in
/// its body; the guard runs the combined session, administrator and
/// installation check on them before the controller touches its service.
pub struct AdminGuard<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    discord_api_base_url: &'a str,
}

impl<'a> AdminGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        discord_api_base_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_api_base_url,
        }
    }

    /// Admits the request only when the caller holds a valid session, has
    /// administrator rights in the guild, and the bot is installed there.
    pub async fn require_admin(
        &self,
        guild_id: &str,
        user_id: &str,
        token: i64,
    ) -> Result<(), AppError> {
        PermissionService::new(
            self.db,
            self.http_client,
            self.oauth_client,
            self.discord_api_base_url,
        )
        .confirm(guild_id, user_id, token)
        .await
    }
}
