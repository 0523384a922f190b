use sea_orm::DatabaseConnection;

use crate::{
    error::{auth::AuthError, AppError},
    service::{
        discord::DiscordClient,
        verify::{GuildVerificationService, UserVerificationService},
    },
    state::OAuth2Client,
};

/// Administrator bit of Discord's permission bitmask.
const ADMINISTRATOR: i64 = 1 << 3;

pub struct PermissionService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub discord_api_base_url: &'a str,
}

impl<'a> PermissionService<'a> {
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

    /// Confirms the caller holds a valid session and administrator rights in
    /// the target guild, and that the bot is installed there.
    ///
    /// Both legs must pass; the call fails as a whole otherwise. The
    /// underlying cause is carried in the error message for diagnostics, not
    /// for machine parsing.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the caller wants to administer
    /// - `user_id`: Discord user ID of the caller
    /// - `token`: The caller's session token
    pub async fn confirm(&self, guild_id: &str, user_id: &str, token: i64) -> Result<(), AppError> {
        self.confirm_admin(guild_id, user_id, token)
            .await
            .map_err(|err| AuthError::PermissionDenied(err.to_string()))?;

        let guild_service =
            GuildVerificationService::new(self.db, self.http_client, self.oauth_client);
        guild_service
            .verify(guild_id)
            .await
            .map_err(|err| AuthError::GuildVerifyFailed(err.to_string()))?;

        Ok(())
    }

    /// Verifies the session and checks the administrator bit with the
    /// caller's own access token.
    async fn confirm_admin(
        &self,
        guild_id: &str,
        user_id: &str,
        token: i64,
    ) -> Result<(), AppError> {
        let user_service = UserVerificationService::new(
            self.db,
            self.http_client,
            self.oauth_client,
            self.discord_api_base_url,
        );
        let session = user_service.verify(token, user_id).await?;

        let discord = DiscordClient::new(self.http_client, self.discord_api_base_url);
        let permissions = discord
            .fetch_guild_permissions(&session.access_token, guild_id)
            .await?
            .ok_or(AuthError::MissingAdministrator)?;

        if permissions & ADMINISTRATOR == 0 {
            return Err(AuthError::MissingAdministrator.into());
        }

        Ok(())
    }
}
