use crate::{error::AppError, model::discord::DiscordUser, service::discord::DiscordClient};

impl<'a> DiscordClient<'a> {
    /// Fetches the profile of the user an access token belongs to.
    ///
    /// # Arguments
    /// - `access_token`: OAuth bearer token for the user
    ///
    /// # Returns
    /// - `Ok(DiscordUser)`: Current identity fields for the token's owner
    /// - `Err(AppError)`: Transport failure, undecodable body, or an error
    ///   object in place of a user
    pub async fn fetch_identity(&self, access_token: &str) -> Result<DiscordUser, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/@me", self.base_url))
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<DiscordUser>()
            .await
            .map_err(|err| {
                AppError::InternalError(format!("Failed to decode discord response: {}", err))
            })?;

        // A bad token gets an error object instead of a user; every field
        // defaults on decode, so the ID doubles as the success check.
        if user.id.is_empty() {
            return Err(AppError::InternalError(
                "Failed to get user info from discord".to_string(),
            ));
        }

        Ok(user)
    }
}
