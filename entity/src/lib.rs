//! SeaORM entity models for the levelboard database.
//!
//! Each module maps one table. Entities are kept free of business logic;
//! repositories in the main crate own all queries and mutations.

pub mod channel_blocklist;
pub mod command;
pub mod guild;
pub mod guild_token;
pub mod guild_xp;
pub mod role_reward;
pub mod user_token;

pub mod prelude;
