//! Thin client for Discord's REST API
//!
//! Identity and guild listing calls authenticate with a user's OAuth bearer
//! token; command registry calls authenticate with the bot credential.

pub mod command;
pub mod guilds;
pub mod identity;

pub struct DiscordClient<'a> {
    pub http_client: &'a reqwest::Client,
    pub base_url: &'a str,
}

impl<'a> DiscordClient<'a> {
    pub fn new(http_client: &'a reqwest::Client, base_url: &'a str) -> Self {
        Self {
            http_client,
            base_url,
        }
    }
}

#[cfg(test)]
mod test;
