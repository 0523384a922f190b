use crate::{
    data::command::CommandRepository,
    error::AppError,
    service::{discord::DiscordClient, interaction::InteractionService},
};

impl<'a> InteractionService<'a> {
    /// Removes a registered slash command from a guild.
    ///
    /// The registry delete runs first and the index row is only evicted after
    /// Discord confirms, so a failed delete leaves the row in place for a
    /// retry.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the command is registered in
    /// - `name`: Catalog name of the command
    ///
    /// # Returns
    /// - `Ok(())`: Command deleted upstream and evicted from the index
    /// - `Err(AppError)`: Bad request when the command was never registered,
    ///   otherwise a registry or store failure
    pub async fn remove(&self, guild_id: &str, name: &str) -> Result<(), AppError> {
        let registered = self.find_registered(guild_id, name).await?;

        DiscordClient::new(self.http_client, self.discord_api_base_url)
            .delete_command(
                self.bot_token,
                self.application_id,
                guild_id,
                &registered.command_id,
            )
            .await?;

        CommandRepository::new(self.db)
            .delete_by_command_id(&registered.command_id)
            .await?;

        Ok(())
    }
}
