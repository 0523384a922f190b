//! Channel blocklist factory for creating test blocklist entities.
//!
//! This module provides factory methods for creating channel blocklist entries
//! with sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test channel blocklist rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::channel_blocklist::ChannelBlocklistFactory;
///
/// let entry = ChannelBlocklistFactory::new(&db)
///     .guild_id("987654321")
///     .channel_id("111222333")
///     .xp_gain(false)
///     .build()
///     .await?;
/// ```
pub struct ChannelBlocklistFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    channel_id: String,
    xp_gain: bool,
}

impl<'a> ChannelBlocklistFactory<'a> {
    /// Creates a new ChannelBlocklistFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"guild-{id}"`
    /// - channel_id: auto-incremented numeric string
    /// - xp_gain: `true` (channel blocked from granting XP)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ChannelBlocklistFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: format!("guild-{}", id),
            channel_id: id.to_string(),
            xp_gain: true,
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

    /// Sets the Discord channel ID.
    ///
    /// # Arguments
    /// - `channel_id` - Discord channel ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = channel_id.into();
        self
    }

    /// Sets whether XP gain is blocked in the channel.
    ///
    /// # Arguments
    /// - `xp_gain` - `true` to block XP gain, `false` to allow it
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn xp_gain(mut self, xp_gain: bool) -> Self {
        self.xp_gain = xp_gain;
        self
    }

    /// Builds and inserts the blocklist entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::channel_blocklist::Model)` - Created blocklist entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::channel_blocklist::Model, DbErr> {
        entity::channel_blocklist::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            xp_gain: ActiveValue::Set(self.xp_gain),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blocked channel in the given guild with default values.
///
/// Shorthand for the factory with `guild_id` set and `xp_gain` left blocked.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the channel belongs to
///
/// # Returns
/// - `Ok(entity::channel_blocklist::Model)` - Created blocklist entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_blocked_channel(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::channel_blocklist::Model, DbErr> {
    ChannelBlocklistFactory::new(db)
        .guild_id(guild_id)
        .build()
        .await
}
