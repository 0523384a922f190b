//! HTTP handlers for the dashboard API and the Discord interactions webhook.
//!
//! Controllers decode and validate the request, run the admin guard where the
//! endpoint mutates guild configuration, call into the service layer, and map
//! the result onto the wire contract. They contain no business logic of their
//! own.

pub mod authorize;
pub mod blocklist;
pub mod guilds;
pub mod interaction;
pub mod levels;
pub mod role_reward;
pub mod verify;
pub mod webhook;
