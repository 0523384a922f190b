//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user session together with a grant for the given guild.
///
/// This is a convenience method that creates:
/// 1. User token (a valid, unexpired session)
/// 2. Guild token (an unexpired grant for `guild_id`)
///
/// Both entities are created with default values. Use the individual
/// factories if you need to customize expiry or token contents.
///
/// # Arguments
/// - `db` - Database connection
/// - `guild_id` - Discord guild ID the grant belongs to
///
/// # Returns
/// - `Ok((user_token, guild_token))` - Tuple of both created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_session_for_guild(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<(entity::user_token::Model, entity::guild_token::Model), DbErr> {
    let user_token = crate::factory::user_token::create_user_token(db).await?;
    let guild_token = crate::factory::guild_token::create_guild_token(db, guild_id).await?;

    Ok((user_token, guild_token))
}
