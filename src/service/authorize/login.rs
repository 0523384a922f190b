use crate::{
    data::user_token::UserTokenRepository,
    error::AppError,
    service::{authorize::AuthorizeService, discord::DiscordClient, oauth::OauthService},
};

impl<'a> AuthorizeService<'a> {
    /// Completes the user login flow for an authorization code.
    ///
    /// Exchanges the code, asks Discord who the grant belongs to and stores a
    /// fresh session record. The record's row ID becomes the session token
    /// the dashboard attaches to every later request.
    ///
    /// # Arguments
    /// - `code`: Authorization code from the OAuth redirect
    ///
    /// # Returns
    /// - `Ok(Model)`: Stored session carrying the caller's profile fields
    /// - `Err(AppError)`: Failed exchange, unusable grant, or upstream
    ///   identity failure; nothing is stored in that case
    pub async fn login(&self, code: String) -> Result<entity::user_token::Model, AppError> {
        let oauth = OauthService::new(self.oauth_client, self.http_client);
        let grant = oauth.exchange_code(code).await?;

        let discord = DiscordClient::new(self.http_client, self.discord_api_base_url);
        let user = discord.fetch_identity(&grant.access_token).await?;

        let record = UserTokenRepository::new(self.db)
            .create(&user, &grant)
            .await?;

        Ok(record)
    }
}
