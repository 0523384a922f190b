//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle unique identifier
//! generation, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let token = factory::user_token::create_user_token(&db).await?;
//!     let guild = factory::guild_token::create_guild_token(&db, "1001").await?;
//!
//!     // Create a user session with a matching guild grant
//!     let (user, guild) = factory::helpers::create_session_for_guild(&db, "1001").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let token = factory::user_token::UserTokenFactory::new(&db)
//!     .user_id("987654321")
//!     .expires_at(0)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user_token` - Create user OAuth session entities
//! - `guild_token` - Create guild OAuth grant entities
//! - `command` - Create registered command index entities
//! - `guild` - Create onboarded guild entities
//! - `channel_blocklist` - Create channel blocklist entities
//! - `role_reward` - Create role reward entities
//! - `guild_xp` - Create guild member XP entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod channel_blocklist;
pub mod command;
pub mod guild;
pub mod guild_token;
pub mod guild_xp;
pub mod helpers;
pub mod role_reward;
pub mod user_token;

// Re-export commonly used factory functions for concise usage
pub use channel_blocklist::create_blocked_channel;
pub use command::create_command;
pub use guild::create_guild;
pub use guild_token::create_guild_token;
pub use guild_xp::create_guild_xp;
pub use role_reward::create_role_reward;
pub use user_token::{create_expired_user_token, create_user_token};
