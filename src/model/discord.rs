//! Wire types for Discord's OAuth and REST APIs.
//!
//! Inbound types mark every field `#[serde(default)]` because Discord replaces
//! the expected body with an error object on failure; decoding then yields an
//! empty ID which the services treat as an upstream failure.

use oauth2::ExtraTokenFields;
use serde::{Deserialize, Serialize};

/// Non-standard fields Discord attaches to its OAuth token responses.
///
/// When the authorization code was issued through the bot-install flow the
/// response carries the `guild` the bot was added to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordTokenFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guild: Option<TokenGuild>,
}

impl ExtraTokenFields for DiscordTokenFields {}

/// Guild object embedded in a bot-install token response. Only the ID is used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenGuild {
    #[serde(default)]
    pub id: String,
}

/// Discord user profile from `GET /users/@me`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DiscordUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub discriminator: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Guild entry from `GET /users/@me/guilds`.
///
/// Serialized back to the dashboard unchanged as part of the guild listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserGuild {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub owner: bool,
    #[serde(default)]
    pub permissions: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Identifying fields of a guild slash command returned by Discord's command
/// endpoints.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommandDetails {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub guild_id: String,
}

/// Full slash command payload sent to Discord when creating or updating a
/// guild command.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: i32,
    pub options: Vec<CommandOption>,
    pub default_permission: bool,
}

/// One option of a slash command definition. Optional attributes are omitted
/// from the payload when unset.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct CommandOption {
    #[serde(rename = "type")]
    pub kind: i32,
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<OptionChoice>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOption>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channel_types: Vec<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<f64>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub autocomplete: bool,
}

/// Fixed choice for a string or number command option.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OptionChoice {
    pub name: String,
    pub value: String,
}

/// Target of a command permission overwrite.
///
/// Discord encodes the target kind as an integer; the enum round-trips through
/// that encoding so the dashboard payload can be forwarded as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PermissionTargetKind {
    Role,
    User,
}

impl TryFrom<i32> for PermissionTargetKind {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Role),
            2 => Ok(Self::User),
            other => Err(format!("invalid permission target type: {}", other)),
        }
    }
}

impl From<PermissionTargetKind> for i32 {
    fn from(kind: PermissionTargetKind) -> Self {
        match kind {
            PermissionTargetKind::Role => 1,
            PermissionTargetKind::User => 2,
        }
    }
}

/// Permission overwrite for a registered command, allowing or denying it for a
/// role or user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandPermission {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PermissionTargetKind,
    pub permission: bool,
}

/// Immediate reply to an interaction webhook request.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InteractionCallback {
    #[serde(rename = "type")]
    pub kind: i32,
}

impl InteractionCallback {
    /// Reply to a ping, completing Discord's endpoint validation handshake.
    pub fn pong() -> Self {
        Self { kind: 1 }
    }

    /// Acknowledge a command invocation while the responder prepares the real
    /// reply.
    pub fn deferred() -> Self {
        Self { kind: 5 }
    }
}

/// Payload handed to the responder service for a verified command invocation.
#[derive(Debug, Clone, Serialize)]
pub struct ForwardedInteraction {
    pub interaction: serde_json::Value,
    pub token: String,
}
