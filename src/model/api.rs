//! Request and response DTOs for the dashboard-facing API.
//!
//! Field names are part of the wire contract with the dashboard client and
//! use its camelCase convention, so most fields carry serde renames.

use serde::{Deserialize, Serialize};

use crate::model::discord::{CommandPermission, UserGuild};

/// Standard error response format for API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Standard success response carrying a human-readable status message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageDto {
    pub message: String,
}

/// Request body for exchanging an OAuth authorization code.
///
/// Used by both the user login flow and the bot-install flow; the flows differ
/// only in what Discord attaches to the resulting token response.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthorizeDto {
    #[serde(default)]
    pub code: String,
}

/// Response body for a completed user login, echoing the profile fields the
/// dashboard renders plus the session token for subsequent requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionDto {
    #[serde(rename = "userID")]
    pub user_id: String,
    pub username: String,
    pub discriminator: String,
    pub avatar: String,
    pub token: i64,
}

/// Response body for a completed bot install.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GuildAuthorizedDto {
    #[serde(rename = "guildID")]
    pub guild_id: String,
}

/// Request body for verifying a user session.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyUserDto {
    #[serde(default)]
    pub token: i64,
    #[serde(default, rename = "userID")]
    pub user_id: String,
}

/// Request body for verifying a guild's stored OAuth grant.
#[derive(Debug, Clone, Deserialize)]
pub struct VerifyGuildDto {
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
}

/// Response body for a verified guild grant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifiedGuildDto {
    #[serde(rename = "guildID")]
    pub guild_id: String,
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Request body for the combined session, administrator and guild grant check.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmPermissionDto {
    #[serde(default, rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub token: i64,
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
}

/// Request body for registering a slash command in a guild.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterCommandDto {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
    #[serde(default, rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub token: i64,
    #[serde(default, rename = "defaultPermission")]
    pub default_permission: bool,
}

/// Request body for removing a registered slash command from a guild.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoveCommandDto {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
    #[serde(default, rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub token: i64,
}

/// Request body for overwriting a registered command's permission list.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandPermissionsDto {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
    #[serde(default, rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub token: i64,
    #[serde(default)]
    pub permissions: Vec<CommandPermission>,
}

/// Request body for listing the caller's guilds.
#[derive(Debug, Clone, Deserialize)]
pub struct ListGuildsDto {
    #[serde(default)]
    pub token: i64,
    #[serde(default, rename = "userID")]
    pub user_id: String,
}

/// One entry of the guild listing: the Discord guild plus whether the bot is
/// already onboarded there.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OnboardedGuildDto {
    pub guild: UserGuild,
    #[serde(rename = "botIsMember")]
    pub bot_is_member: bool,
}

/// Request body for updating a channel's blocklist entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BlocklistUpdateDto {
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
    #[serde(default, rename = "channelID")]
    pub channel_id: String,
    #[serde(default)]
    pub token: i64,
    #[serde(default, rename = "userID")]
    pub user_id: String,
    #[serde(default, rename = "listType")]
    pub list_type: String,
    #[serde(default)]
    pub state: bool,
}

/// Request body for creating or deleting a role reward.
#[derive(Debug, Clone, Deserialize)]
pub struct RoleRewardUpdateDto {
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
    #[serde(default, rename = "roleID")]
    pub role_id: String,
    #[serde(default)]
    pub token: i64,
    #[serde(default, rename = "userID")]
    pub user_id: String,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub persistent: bool,
    #[serde(default)]
    pub state: bool,
}

/// Request body for bulk level operations on a guild.
#[derive(Debug, Clone, Deserialize)]
pub struct ModifyLevelsDto {
    #[serde(default)]
    pub operation: String,
    #[serde(default, rename = "guildID")]
    pub guild_id: String,
    #[serde(default, rename = "callerID")]
    pub caller_id: String,
    #[serde(default)]
    pub token: i64,
    #[serde(default)]
    pub source: String,
}
