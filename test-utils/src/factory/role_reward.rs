//! Role reward factory for creating test reward entities.
//!
//! This module provides factory methods for creating role reward entities with
//! sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test role rewards with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::role_reward::RoleRewardFactory;
///
/// let reward = RoleRewardFactory::new(&db)
///     .guild_id("987654321")
///     .level(10)
///     .persistent(true)
///     .build()
///     .await?;
/// ```
pub struct RoleRewardFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    role_id: String,
    level: i32,
    persistent: bool,
}

impl<'a> RoleRewardFactory<'a> {
    /// Creates a new RoleRewardFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"guild-{id}"`
    /// - role_id: auto-incremented numeric string
    /// - level: `5`
    /// - persistent: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `RoleRewardFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: format!("guild-{}", id),
            role_id: id.to_string(),
            level: 5,
            persistent: false,
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

    /// Sets the Discord role ID.
    ///
    /// # Arguments
    /// - `role_id` - Discord role ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    /// Sets the level the reward is granted at.
    ///
    /// # Arguments
    /// - `level` - Level threshold
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    /// Sets whether the role is kept after falling below the level.
    ///
    /// # Arguments
    /// - `persistent` - `true` to keep the role once granted
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    /// Builds and inserts the role reward entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::role_reward::Model)` - Created role reward entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::role_reward::Model, DbErr> {
        entity::role_reward::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            role_id: ActiveValue::Set(self.role_id),
            level: ActiveValue::Set(self.level),
            persistent: ActiveValue::Set(self.persistent),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role reward in the given guild with default values.
///
/// Shorthand for the factory with `guild_id` set.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the reward belongs to
///
/// # Returns
/// - `Ok(entity::role_reward::Model)` - Created role reward entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_role_reward(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::role_reward::Model, DbErr> {
    RoleRewardFactory::new(db).guild_id(guild_id).build().await
}
