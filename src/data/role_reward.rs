use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::leaderboard::LeaderboardRoleReward;

/// Repository for level-up role rewards.
pub struct RoleRewardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRewardRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a reward or updates the persistence flag of an existing one.
    pub async fn upsert(
        &self,
        guild_id: &str,
        role_id: &str,
        level: i32,
        persistent: bool,
    ) -> Result<entity::role_reward::Model, DbErr> {
        entity::prelude::RoleReward::insert(entity::role_reward::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            role_id: ActiveValue::Set(role_id.to_string()),
            level: ActiveValue::Set(level),
            persistent: ActiveValue::Set(persistent),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::role_reward::Column::GuildId,
                entity::role_reward::Column::RoleId,
                entity::role_reward::Column::Level,
            ])
            .update_columns([entity::role_reward::Column::Persistent])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn delete(
        &self,
        guild_id: &str,
        role_id: &str,
        level: i32,
    ) -> Result<(), DbErr> {
        entity::prelude::RoleReward::delete_many()
            .filter(entity::role_reward::Column::GuildId.eq(guild_id))
            .filter(entity::role_reward::Column::RoleId.eq(role_id))
            .filter(entity::role_reward::Column::Level.eq(level))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn delete_by_guild(&self, guild_id: &str) -> Result<(), DbErr> {
        entity::prelude::RoleReward::delete_many()
            .filter(entity::role_reward::Column::GuildId.eq(guild_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Bulk-inserts rewards discovered by a leaderboard import. Imported
    /// rewards start out non-persistent.
    pub async fn insert_many(
        &self,
        guild_id: &str,
        rewards: &[LeaderboardRoleReward],
    ) -> Result<(), DbErr> {
        if rewards.is_empty() {
            return Ok(());
        }

        let models = rewards
            .iter()
            .map(|reward| entity::role_reward::ActiveModel {
                guild_id: ActiveValue::Set(guild_id.to_string()),
                role_id: ActiveValue::Set(reward.role.id.clone()),
                level: ActiveValue::Set(reward.level),
                persistent: ActiveValue::Set(false),
                ..Default::default()
            });

        entity::prelude::RoleReward::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
