//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Upstream Calls**: Talking to the Discord API and the leaderboard provider

pub mod authorize;
pub mod blocklist;
pub mod discord;
pub mod guilds;
pub mod interaction;
pub mod levels;
pub mod oauth;
pub mod role_reward;
pub mod verify;
pub mod webhook;

#[cfg(test)]
pub(crate) mod testing;
