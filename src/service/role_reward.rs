//! Role reward configuration.

use sea_orm::DatabaseConnection;

use crate::{data::role_reward::RoleRewardRepository, error::AppError};

/// Service managing the roles granted when members reach a level.
pub struct RoleRewardService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RoleRewardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or deletes a role reward depending on `state`.
    ///
    /// Re-creating an existing reward updates its persistence flag instead of
    /// duplicating the row.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the reward applies in
    /// - `role_id`: Role granted by the reward
    /// - `level`: Level at which the role is granted
    /// - `persistent`: Whether the member keeps the role after earning higher rewards
    /// - `state`: `true` to create or update the reward, `false` to delete it
    ///
    /// # Returns
    /// - `Ok(())`: Reward created, updated, or deleted
    /// - `Err(AppError)`: Store failure
    pub async fn update(
        &self,
        guild_id: &str,
        role_id: &str,
        level: i32,
        persistent: bool,
        state: bool,
    ) -> Result<(), AppError> {
        let repository = RoleRewardRepository::new(self.db);

        if state {
            repository
                .upsert(guild_id, role_id, level, persistent)
                .await?;
        } else {
            repository.delete(guild_id, role_id, level).await?;
        }

        Ok(())
    }
}
