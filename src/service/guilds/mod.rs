//! Guild listing for the dashboard's server picker.

use sea_orm::DatabaseConnection;

use crate::{
    data::{guild::GuildRepository, user_token::UserTokenRepository},
    error::{auth::AuthError, AppError},
    model::api::OnboardedGuildDto,
    service::{discord::DiscordClient, oauth::OauthService},
    state::OAuth2Client,
};

#[cfg(test)]
mod test;

/// Service listing the caller's guilds with the bot's membership status.
pub struct GuildListingService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub discord_api_base_url: &'a str,
}

impl<'a> GuildListingService<'a> {
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

    /// Lists the caller's guilds together with whether the bot is a member of
    /// each one.
    ///
    /// The dashboard calls this with a session restored from storage, so the
    /// stored access token is often stale. A failed guild fetch triggers one
    /// token refresh; the refreshed grant is persisted before the retry.
    ///
    /// # Arguments
    /// - `token`: Session token issued at login
    /// - `user_id`: Discord user ID the session must belong to
    ///
    /// # Returns
    /// - `Ok(Vec<OnboardedGuildDto>)`: The caller's guilds, onboarding flag set
    /// - `Err(AppError)`: Unauthorized session, failed refresh, or a guild
    ///   fetch that failed even with a fresh token
    pub async fn list(
        &self,
        token: i64,
        user_id: &str,
    ) -> Result<Vec<OnboardedGuildDto>, AppError> {
        let repository = UserTokenRepository::new(self.db);
        let session = repository
            .find_by_id(token)
            .await?
            .filter(|record| record.user_id == user_id)
            .ok_or(AuthError::UserUnauthorized)?;

        let discord = DiscordClient::new(self.http_client, self.discord_api_base_url);

        let guilds = match discord.fetch_guilds(&session.access_token).await {
            Ok(guilds) => guilds,
            Err(_) => {
                let grant = OauthService::new(self.oauth_client, self.http_client)
                    .refresh(&session.refresh_token)
                    .await?;

                let access_token = grant.access_token.clone();
                repository.update_grant(session, &grant).await?;

                discord.fetch_guilds(&access_token).await?
            }
        };

        let guild_ids: Vec<&str> = guilds.iter().map(|guild| guild.id.as_str()).collect();
        let member_ids = GuildRepository::new(self.db)
            .filter_member_ids(&guild_ids)
            .await?;

        Ok(guilds
            .into_iter()
            .map(|guild| {
                let bot_is_member = member_ids.contains(&guild.id);
                OnboardedGuildDto {
                    guild,
                    bot_is_member,
                }
            })
            .collect())
    }
}
