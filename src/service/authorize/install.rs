use crate::{
    data::guild_token::GuildTokenRepository,
    error::AppError,
    service::{authorize::AuthorizeService, oauth::OauthService},
};

impl<'a> AuthorizeService<'a> {
    /// Completes the bot-install flow for an authorization code.
    ///
    /// The install flow's token response names the guild the bot was added
    /// to; the grant is stored against that guild, replacing any grant from
    /// an earlier install.
    ///
    /// # Arguments
    /// - `code`: Authorization code from the install redirect
    ///
    /// # Returns
    /// - `Ok(Model)`: Stored installation grant
    /// - `Err(AppError)`: Failed exchange, or a token response without a
    ///   guild (a plain login code routed here)
    pub async fn install(&self, code: String) -> Result<entity::guild_token::Model, AppError> {
        let oauth = OauthService::new(self.oauth_client, self.http_client);
        let grant = oauth.exchange_code(code).await?;

        let guild_id = grant
            .guild_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                AppError::InternalError("Failed to get guild from discord".to_string())
            })?;

        let record = GuildTokenRepository::new(self.db)
            .upsert(guild_id, &grant)
            .await?;

        Ok(record)
    }
}
