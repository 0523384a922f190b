//! Wire types for the MEE6 leaderboard API used by level imports.

use serde::Deserialize;

/// One page of a guild's MEE6 leaderboard.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeaderboardPage {
    #[serde(default)]
    pub page: i64,
    #[serde(default)]
    pub players: Vec<LeaderboardPlayer>,
    #[serde(default)]
    pub role_rewards: Vec<LeaderboardRoleReward>,
}

/// A ranked guild member with their accumulated XP.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeaderboardPlayer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub xp: i64,
}

/// A role granted at a given level.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeaderboardRoleReward {
    #[serde(default, rename = "rank")]
    pub level: i32,
    pub role: LeaderboardRole,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LeaderboardRole {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub color: i32,
}
