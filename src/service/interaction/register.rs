use crate::{
    data::command::CommandRepository,
    error::AppError,
    service::{
        discord::DiscordClient,
        interaction::{CommandTemplate, InteractionService},
    },
};

impl<'a> InteractionService<'a> {
    /// Registers a slash command in a guild, or updates it in place when the
    /// guild already has one under the same name.
    ///
    /// Discord assigns the command ID; the index row is replaced with whatever
    /// identity the registry reports, so re-registering converges even after a
    /// previous attempt left the index stale.
    ///
    /// # Arguments
    /// - `guild_id`: Guild to register the command in
    /// - `name`: Catalog name of the command
    /// - `default_permission`: Whether the command starts enabled for everyone
    ///
    /// # Returns
    /// - `Ok(entity::command::Model)`: Stored index row for the registered command
    /// - `Err(AppError)`: Unknown command name, registry rejection, or store failure
    pub async fn register(
        &self,
        guild_id: &str,
        name: &str,
        default_permission: bool,
    ) -> Result<entity::command::Model, AppError> {
        let definition = CommandTemplate::from_name(name)?.definition(default_permission);

        let repository = CommandRepository::new(self.db);
        let discord = DiscordClient::new(self.http_client, self.discord_api_base_url);

        let details = match repository.find_by_guild_and_name(guild_id, name).await? {
            Some(existing) => {
                discord
                    .update_command(
                        self.bot_token,
                        self.application_id,
                        guild_id,
                        &existing.command_id,
                        &definition,
                    )
                    .await?
            }
            None => {
                discord
                    .create_command(self.bot_token, self.application_id, guild_id, &definition)
                    .await?
            }
        };

        let stored = repository.replace(&details).await?;

        Ok(stored)
    }
}
