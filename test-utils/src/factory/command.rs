//! Command factory for creating test command index entities.
//!
//! This module provides factory methods for creating registered command index
//! entities with sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test command index rows with customizable fields.
///
/// Provides a builder pattern for creating command entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::command::CommandFactory;
///
/// let command = CommandFactory::new(&db)
///     .guild_id("987654321")
///     .command_name("level")
///     .build()
///     .await?;
/// ```
pub struct CommandFactory<'a> {
    db: &'a DatabaseConnection,
    command_id: String,
    guild_id: String,
    command_name: String,
}

impl<'a> CommandFactory<'a> {
    /// Creates a new CommandFactory with default values.
    ///
    /// Defaults:
    /// - command_id: auto-incremented numeric string
    /// - guild_id: `"guild-{id}"`
    /// - command_name: `"command-{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CommandFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            command_id: id.to_string(),
            guild_id: format!("guild-{}", id),
            command_name: format!("command-{}", id),
        }
    }

    /// Sets the Discord command ID.
    ///
    /// # Arguments
    /// - `command_id` - Discord command ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn command_id(mut self, command_id: impl Into<String>) -> Self {
        self.command_id = command_id.into();
        self
    }

    /// Sets the Discord guild ID.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Sets the command name.
    ///
    /// # Arguments
    /// - `command_name` - Slash command name
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn command_name(mut self, command_name: impl Into<String>) -> Self {
        self.command_name = command_name.into();
        self
    }

    /// Builds and inserts the command entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::command::Model)` - Created command entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::command::Model, DbErr> {
        entity::command::ActiveModel {
            id: ActiveValue::NotSet,
            command_id: ActiveValue::Set(self.command_id),
            guild_id: ActiveValue::Set(self.guild_id),
            command_name: ActiveValue::Set(self.command_name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a command index row for the given guild and name.
///
/// Shorthand for the factory with `guild_id` and `command_name` set.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the command is registered in
/// - `command_name` - Slash command name
///
/// # Returns
/// - `Ok(entity::command::Model)` - Created command entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_command(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
    command_name: impl Into<String>,
) -> Result<entity::command::Model, DbErr> {
    CommandFactory::new(db)
        .guild_id(guild_id)
        .command_name(command_name)
        .build()
        .await
}
