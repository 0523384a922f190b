use reqwest::StatusCode;

use crate::{
    error::AppError,
    model::discord::{CommandDefinition, CommandDetails, CommandPermission},
    service::discord::DiscordClient,
};

impl<'a> DiscordClient<'a> {
    /// Creates a guild slash command in Discord's command registry.
    ///
    /// # Arguments
    /// - `bot_token`: Bot credential authorizing the registry call
    /// - `application_id`: Application owning the command
    /// - `guild_id`: Guild the command is registered in
    /// - `definition`: Full command payload
    ///
    /// # Returns
    /// - `Ok(CommandDetails)`: Identity Discord assigned to the command
    /// - `Err(AppError)`: Transport failure or a non-success registry status
    pub async fn create_command(
        &self,
        bot_token: &str,
        application_id: &str,
        guild_id: &str,
        definition: &CommandDefinition,
    ) -> Result<CommandDetails, AppError> {
        let url = format!(
            "{}/applications/{}/guilds/{}/commands",
            self.base_url, application_id, guild_id
        );

        let request = self.http_client.post(url).json(definition);
        self.send_command_upsert(request, bot_token).await
    }

    /// Updates an already-registered guild slash command in place.
    pub async fn update_command(
        &self,
        bot_token: &str,
        application_id: &str,
        guild_id: &str,
        command_id: &str,
        definition: &CommandDefinition,
    ) -> Result<CommandDetails, AppError> {
        let url = format!(
            "{}/applications/{}/guilds/{}/commands/{}",
            self.base_url, application_id, guild_id, command_id
        );

        let request = self.http_client.patch(url).json(definition);
        self.send_command_upsert(request, bot_token).await
    }

    /// Deletes a guild slash command from the registry.
    ///
    /// Discord acknowledges a successful delete with 204 and nothing else.
    pub async fn delete_command(
        &self,
        bot_token: &str,
        application_id: &str,
        guild_id: &str,
        command_id: &str,
    ) -> Result<(), AppError> {
        let response = self
            .http_client
            .delete(format!(
                "{}/applications/{}/guilds/{}/commands/{}",
                self.base_url, application_id, guild_id, command_id
            ))
            .header("Authorization", format!("Bot {}", bot_token))
            .send()
            .await
            .map_err(|err| AppError::InternalError(format!("Failed to send request: {}", err)))?;

        if response.status() != StatusCode::NO_CONTENT {
            return Err(AppError::InternalError(format!(
                "Failed to delete interaction, status code: {}",
                response.status().as_u16()
            )));
        }

        Ok(())
    }

    /// Replaces the full permission overwrite list of a registered command.
    pub async fn put_command_permissions(
        &self,
        bot_token: &str,
        application_id: &str,
        guild_id: &str,
        command_id: &str,
        permissions: &[CommandPermission],
    ) -> Result<(), AppError> {
        let response = self
            .http_client
            .put(format!(
                "{}/applications/{}/guilds/{}/commands/{}/permissions",
                self.base_url, application_id, guild_id, command_id
            ))
            .header("Authorization", format!("Bot {}", bot_token))
            .json(&permissions)
            .send()
            .await
            .map_err(|err| AppError::InternalError(format!("Failed to send request: {}", err)))?;

        if response.status() != StatusCode::OK {
            return Err(AppError::InternalError(format!(
                "Failed to modify permissions, status code: {}",
                response.status().as_u16()
            )));
        }

        Ok(())
    }

    /// Sends a create or update registry call and decodes the assigned
    /// command identity.
    async fn send_command_upsert(
        &self,
        request: reqwest::RequestBuilder,
        bot_token: &str,
    ) -> Result<CommandDetails, AppError> {
        let response = request
            .header("Authorization", format!("Bot {}", bot_token))
            .send()
            .await
            .map_err(|err| AppError::InternalError(format!("Failed to send request: {}", err)))?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::InternalError(format!(
                "Failed to create interaction, status code: {}, body: {}",
                status.as_u16(),
                body
            )));
        }

        let details = response.json::<CommandDetails>().await.map_err(|err| {
            AppError::InternalError(format!("Failed to decode response: {}", err))
        })?;

        Ok(details)
    }
}
