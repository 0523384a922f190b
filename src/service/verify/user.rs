use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::user_token::UserTokenRepository,
    error::{auth::AuthError, AppError},
    service::{discord::DiscordClient, oauth::OauthService},
    state::OAuth2Client,
};

pub struct UserVerificationService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub discord_api_base_url: &'a str,
}

impl<'a> UserVerificationService<'a> {
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

    /// Verifies that a session token exists and belongs to the given user.
    ///
    /// Refreshes the underlying OAuth grant when it has expired, and always
    /// re-syncs the stored identity fields from Discord, so the returned
    /// record carries a usable access token and current display data. An
    /// absent record and a user mismatch are indistinguishable to the caller.
    ///
    /// # Arguments
    /// - `token`: Opaque session token issued at login
    /// - `user_id`: Discord user ID the session must belong to
    ///
    /// # Returns
    /// - `Ok(Model)`: Verified session with a live access token
    /// - `Err(AppError)`: Unauthorized on mismatch, failed refresh, or
    ///   upstream identity failure
    pub async fn verify(
        &self,
        token: i64,
        user_id: &str,
    ) -> Result<entity::user_token::Model, AppError> {
        let token_repo = UserTokenRepository::new(self.db);

        let record = token_repo
            .find_by_id(token)
            .await?
            .filter(|record| record.user_id == user_id)
            .ok_or(AuthError::UserUnauthorized)?;

        let record = if record.expires_at < Utc::now().timestamp() {
            let oauth = OauthService::new(self.oauth_client, self.http_client);
            let grant = oauth.refresh(&record.refresh_token).await?;

            token_repo.update_grant(record, &grant).await?
        } else {
            record
        };

        let discord = DiscordClient::new(self.http_client, self.discord_api_base_url);
        let identity = discord.fetch_identity(&record.access_token).await?;

        let record = token_repo.sync_identity(record, &identity).await?;

        Ok(record)
    }
}
