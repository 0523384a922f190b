//! Guild token factory for creating test guild OAuth grant entities.
//!
//! This module provides factory methods for creating guild token entities with
//! sensible defaults, reducing boilerplate in tests.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guild tokens with customizable fields.
///
/// Provides a builder pattern for creating guild token entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::guild_token::GuildTokenFactory;
///
/// let grant = GuildTokenFactory::new(&db)
///     .guild_id("987654321")
///     .expires_at(0)
///     .build()
///     .await?;
/// ```
pub struct GuildTokenFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    access_token: String,
    refresh_token: String,
    expires_at: i64,
}

impl<'a> GuildTokenFactory<'a> {
    /// Creates a new GuildTokenFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented numeric string
    /// - access_token: `"guild-access-{id}"`
    /// - refresh_token: `"guild-refresh-{id}"`
    /// - expires_at: one hour from now (not expired)
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `GuildTokenFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            access_token: format!("guild-access-{}", id),
            refresh_token: format!("guild-refresh-{}", id),
            expires_at: Utc::now().timestamp() + 3600,
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

    /// Sets the OAuth access token.
    ///
    /// # Arguments
    /// - `access_token` - Bearer token string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = access_token.into();
        self
    }

    /// Sets the OAuth refresh token.
    ///
    /// # Arguments
    /// - `refresh_token` - Refresh token string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn refresh_token(mut self, refresh_token: impl Into<String>) -> Self {
        self.refresh_token = refresh_token.into();
        self
    }

    /// Sets the expiry timestamp in unix seconds.
    ///
    /// Pass a timestamp in the past to simulate an expired grant.
    ///
    /// # Arguments
    /// - `expires_at` - Unix timestamp in seconds
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn expires_at(mut self, expires_at: i64) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the guild token entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::guild_token::Model)` - Created guild token entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::guild_token::Model, DbErr> {
        entity::guild_token::ActiveModel {
            id: ActiveValue::NotSet,
            guild_id: ActiveValue::Set(self.guild_id),
            access_token: ActiveValue::Set(self.access_token),
            refresh_token: ActiveValue::Set(self.refresh_token),
            expires_at: ActiveValue::Set(self.expires_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild token for the given guild with default values.
///
/// Shorthand for `GuildTokenFactory::new(db).guild_id(guild_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the grant belongs to
///
/// # Returns
/// - `Ok(entity::guild_token::Model)` - Created guild token entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_token(
    db: &DatabaseConnection,
    guild_id: impl Into<String>,
) -> Result<entity::guild_token::Model, DbErr> {
    GuildTokenFactory::new(db).guild_id(guild_id).build().await
}
