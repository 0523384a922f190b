//! Bulk level operations: guild-wide reset and leaderboard import.

use sea_orm::DatabaseConnection;

use crate::{
    data::{guild_xp::GuildXpRepository, role_reward::RoleRewardRepository},
    error::AppError,
};

pub mod import;

#[cfg(test)]
mod test;

/// Service for destructive, guild-wide level operations.
pub struct LevelsService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub leaderboard_base_url: &'a str,
}

impl<'a> LevelsService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        leaderboard_base_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            leaderboard_base_url,
        }
    }

    /// Dispatches a level operation by its wire name.
    ///
    /// # Arguments
    /// - `operation`: `"reset"` or `"import"`
    /// - `guild_id`: Guild the operation applies to
    /// - `source`: Import source name, ignored by `reset`
    ///
    /// # Returns
    /// - `Ok(())`: Operation completed
    /// - `Err(AppError)`: Bad request for an unknown operation, otherwise the
    ///   operation's own failure
    pub async fn modify(
        &self,
        operation: &str,
        guild_id: &str,
        source: &str,
    ) -> Result<(), AppError> {
        match operation {
            "reset" => self.reset(guild_id).await,
            "import" => self.import(guild_id, source).await,
            _ => Err(AppError::BadRequest("Invalid operation".to_string())),
        }
    }

    /// Deletes all of a guild's XP records and role rewards.
    pub async fn reset(&self, guild_id: &str) -> Result<(), AppError> {
        GuildXpRepository::new(self.db)
            .delete_by_guild(guild_id)
            .await?;
        RoleRewardRepository::new(self.db)
            .delete_by_guild(guild_id)
            .await?;

        Ok(())
    }
}
