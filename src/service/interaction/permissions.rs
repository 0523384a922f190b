use crate::{
    error::AppError,
    model::discord::CommandPermission,
    service::{discord::DiscordClient, interaction::InteractionService},
};

impl<'a> InteractionService<'a> {
    /// Overwrites the permission list of a registered command.
    ///
    /// The list replaces whatever Discord currently holds. Permissions are not
    /// mirrored locally, so there is nothing to persist on success.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the command is registered in
    /// - `name`: Catalog name of the command
    /// - `permissions`: Full set of role and user overwrites to apply
    ///
    /// # Returns
    /// - `Ok(())`: Discord accepted the new permission list
    /// - `Err(AppError)`: Bad request when the command was never registered,
    ///   otherwise a registry failure
    pub async fn set_permissions(
        &self,
        guild_id: &str,
        name: &str,
        permissions: &[CommandPermission],
    ) -> Result<(), AppError> {
        let registered = self.find_registered(guild_id, name).await?;

        DiscordClient::new(self.http_client, self.discord_api_base_url)
            .put_command_permissions(
                self.bot_token,
                self.application_id,
                guild_id,
                &registered.command_id,
                permissions,
            )
            .await?;

        Ok(())
    }
}
