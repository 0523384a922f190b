//! Guild factory for creating onboarded guild entities.
//!
//! This module provides factory methods for marking guilds the bot is a
//! member of, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild membership rows.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild::GuildFactory;
///
/// let guild = GuildFactory::new(&db)
///     .guild_id("987654321")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
        }
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

    /// Builds and inserts the guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        entity::guild::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an onboarded guild with default values.
///
/// Shorthand for `GuildFactory::new(db).guild_id(guild_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID to mark as onboarded
///
/// # Returns
/// - `Ok(entity::guild::Model)` - Created guild entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).guild_id(guild_id).build().await
}
