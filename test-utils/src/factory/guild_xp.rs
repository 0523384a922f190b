//! Guild XP factory for creating test member XP entities.
//!
//! This module provides factory methods for creating guild member XP rows with
//! sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild XP rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_xp::GuildXpFactory;
///
/// let record = GuildXpFactory::new(&db)
///     .guild_id("987654321")
///     .user_id("111222333")
///     .xp(5000)
///     .build()
///     .await?;
/// ```
pub struct GuildXpFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: String,
    nickname: String,
    avatar: String,
    xp: i64,
}

impl<'a> GuildXpFactory<'a> {
    /// Creates a new GuildXpFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"guild-{id}"`
    /// - user_id: auto-incremented numeric string
    /// - nickname: `"Member {id}"`
    /// - avatar: `"avatar{id}"`
    /// - xp: `100`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildXpFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: format!("guild-{}", id),
            user_id: id.to_string(),
            nickname: format!("Member {}", id),
            avatar: format!("avatar{}", id),
            xp: 100,
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

    /// Sets the Discord user ID.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Sets the member nickname.
    ///
    /// # Arguments
    /// - `nickname` - Display name within the guild
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Sets the accumulated XP total.
    ///
    /// # Arguments
    /// - `xp` - XP amount
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn xp(mut self, xp: i64) -> Self {
        self.xp = xp;
        self
    }

    /// Builds and inserts the guild XP entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_xp::Model)` - Created guild XP entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_xp::Model, DbErr> {
        entity::guild_xp::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            nickname: ActiveValue::Set(self.nickname),
            avatar: ActiveValue::Set(self.avatar),
            xp: ActiveValue::Set(self.xp),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild XP row in the given guild with default values.
///
/// Shorthand for the factory with `guild_id` set.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the member belongs to
///
/// # Returns
/// - `Ok(entity::guild_xp::Model)` - Created guild XP entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_xp(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild_xp::Model, DbErr> {
    GuildXpFactory::new(db).guild_id(guild_id).build().await
}
