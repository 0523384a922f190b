//! User token factory for creating test OAuth session entities.
//!
//! This module provides factory methods for creating user token entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test user tokens with customizable fields.
///
/// Provides a builder pattern for creating user token entities with default
/// values that can be overridden as needed for specific test scenarios. The
/// row's auto-generated primary key doubles as the caller-facing session token.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user_token::UserTokenFactory;
///
/// let token = UserTokenFactory::new(&db)
///     .user_id("987654321")
///     .expires_at(0)
///     .build()
///     .await?;
/// ```
pub struct UserTokenFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    access_token: String,
    refresh_token: String,
    expires_at: i64,
    username: String,
    discriminator: String,
    avatar: String,
}

impl<'a> UserTokenFactory<'a> {
    /// Creates a new UserTokenFactory with default values.
    ///
    /// Defaults:
    /// - user_id: auto-incremented numeric string
    /// - access_token: `"access-{id}"`
    /// - refresh_token: `"refresh-{id}"`
    /// - expires_at: one hour from now (not expired)
    /// - username: `"User {id}"`
    /// - discriminator: `"0001"`
    /// - avatar: `"avatar{id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserTokenFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id.to_string(),
            access_token: format!("access-{}", id),
            refresh_token: format!("refresh-{}", id),
            expires_at: Utc::now().timestamp() + 3600,
            username: format!("User {}", id),
            discriminator: "0001".to_string(),
            avatar: format!("avatar{}", id),
        }
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

    /// Sets the cached Discord username.
    ///
    /// # Arguments
    /// - `username` - Display name for the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the cached Discord avatar hash.
    ///
    /// # Arguments
    /// - `avatar` - Discord avatar hash
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }

    /// Builds and inserts the user token entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user_token::Model)` - Created user token entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user_token::Model, DbErr> {
        entity::user_token::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            access_token: ActiveValue::Set(self.access_token),
            refresh_token: ActiveValue::Set(self.refresh_token),
            expires_at: ActiveValue::Set(self.expires_at),
            username: ActiveValue::Set(self.username),
            discriminator: ActiveValue::Set(self.discriminator),
            avatar: ActiveValue::Set(self.avatar),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user token with default values.
///
/// Shorthand for `UserTokenFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user_token::Model)` - Created user token entity
/// - `Err(DbErr)` - Database error during insert
///
/// # Example
///
/// ```rust,ignore
/// let token = create_user_token(&db).await?;
/// ```
pub async fn create_user_token(
    db: &DatabaseConnection,
) -> Result<entity::user_token::Model, DbErr> {
    UserTokenFactory::new(db).build().await
}

/// Creates a user token whose grant expired an hour ago.
///
/// Useful for exercising refresh paths during verification.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user_token::Model)` - Created user token entity with past expiry
/// - `Err(DbErr)` - Database error during insert
pub async fn create_expired_user_token(
    db: &DatabaseConnection,
) -> Result<entity::user_token::Model, DbErr> {
    UserTokenFactory::new(db)
        .expires_at(Utc::now().timestamp() - 3600)
        .build()
        .await
}
