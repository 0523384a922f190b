//! Slash command registration against Discord's command registry.
//!
//! Every command registered upstream is mirrored into a local index keyed by
//! `(guild, name)` so later updates, removals, and permission pushes can
//! recover the command ID Discord assigned.

use sea_orm::DatabaseConnection;

use crate::{data::command::CommandRepository, error::AppError};

pub mod permissions;
pub mod register;
pub mod remove;
pub mod template;

pub use template::CommandTemplate;

#[cfg(test)]
mod test;

/// Service for registering and managing guild slash commands.
pub struct InteractionService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub discord_api_base_url: &'a str,
    pub application_id: &'a str,
    pub bot_token: &'a str,
}

impl<'a> InteractionService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        discord_api_base_url: &'a str,
        application_id: &'a str,
        bot_token: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            discord_api_base_url,
            application_id,
            bot_token,
        }
    }

    /// Looks up the index row for a command that must already be registered.
    async fn find_registered(
        &self,
        guild_id: &str,
        name: &str,
    ) -> Result<entity::command::Model, AppError> {
        CommandRepository::new(self.db)
            .find_by_guild_and_name(guild_id, name)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Interaction does not exist: no registered command for this guild".to_string(),
                )
            })
    }
}
