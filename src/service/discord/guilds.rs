use reqwest::StatusCode;

use crate::{error::AppError, model::discord::UserGuild, service::discord::DiscordClient};

impl<'a> DiscordClient<'a> {
    /// Lists every guild the access token's user belongs to.
    ///
    /// An expired token surfaces as a non-200 status so the caller can decide
    /// whether to refresh and retry.
    pub async fn fetch_guilds(&self, access_token: &str) -> Result<Vec<UserGuild>, AppError> {
        let response = self
            .http_client
            .get(format!("{}/users/@me/guilds", self.base_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::InternalError(format!(
                "guild list returned status code {}",
                response.status().as_u16()
            )));
        }

        let guilds = response.json::<Vec<UserGuild>>().await.map_err(|err| {
            AppError::InternalError(format!("Failed to decode discord response: {}", err))
        })?;

        Ok(guilds)
    }

    /// Returns the user's permission bitmask in the given guild, or `None`
    /// when the guild does not appear in the user's guild listing.
    ///
    /// Pages the listing down to the target guild by requesting the single
    /// entry sorting directly after `guild_id - 1`.
    pub async fn fetch_guild_permissions(
        &self,
        access_token: &str,
        guild_id: &str,
    ) -> Result<Option<i64>, AppError> {
        let after = guild_id
            .parse::<i64>()
            .map_err(|_| AppError::BadRequest("Invalid guild ID".to_string()))?
            - 1;

        let response = self
            .http_client
            .get(format!(
                "{}/users/@me/guilds?after={}&limit=1",
                self.base_url, after
            ))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::InternalError(format!(
                "guild member returned status code {}",
                response.status().as_u16()
            )));
        }

        let guilds = response.json::<Vec<UserGuild>>().await.map_err(|err| {
            AppError::InternalError(format!("Failed to decode discord response: {}", err))
        })?;

        let Some(guild) = guilds.into_iter().find(|guild| guild.id == guild_id) else {
            return Ok(None);
        };

        let permissions = guild.permissions.parse::<i64>().map_err(|err| {
            AppError::InternalError(format!("Failed to parse guild permissions: {}", err))
        })?;

        Ok(Some(permissions))
    }
}
