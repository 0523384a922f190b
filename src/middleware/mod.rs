//! Request guards controllers run before touching a service.

pub mod admin;
