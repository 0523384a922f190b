use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    data::guild_token::GuildTokenRepository,
    error::{auth::AuthError, AppError},
    service::oauth::OauthService,
    state::OAuth2Client,
};

pub struct GuildVerificationService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
}

impl<'a> GuildVerificationService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
        }
    }

    /// Verifies the bot is installed in a guild and returns its grant with a
    /// usable access token, refreshing in place when expired.
    ///
    /// There is no caller identity to match here; the record represents the
    /// installation, not a session.
    ///
    /// # Arguments
    /// - `guild_id`: Discord guild ID the grant belongs to
    ///
    /// # Returns
    /// - `Ok(Model)`: Installation grant with a live access token
    /// - `Err(AppError)`: Unauthorized when no grant exists or refresh fails
    pub async fn verify(&self, guild_id: &str) -> Result<entity::guild_token::Model, AppError> {
        let token_repo = GuildTokenRepository::new(self.db);

        let record = token_repo
            .find_by_guild_id(guild_id)
            .await?
            .ok_or(AuthError::GuildUnauthorized)?;

        if record.expires_at >= Utc::now().timestamp() {
            return Ok(record);
        }

        let oauth = OauthService::new(self.oauth_client, self.http_client);
        let grant = oauth.refresh(&record.refresh_token).await?;

        let record = token_repo.upsert(guild_id, &grant).await?;

        Ok(record)
    }
}
