use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::leaderboard::LeaderboardPlayer;

/// Repository for per-member XP records.
pub struct GuildXpRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildXpRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn delete_by_guild(&self, guild_id: &str) -> Result<(), DbErr> {
        entity::prelude::GuildXp::delete_many()
            .filter(entity::guild_xp::Column::GuildId.eq(guild_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Bulk-inserts imported leaderboard players. The leaderboard username is
    /// stored as the member's nickname.
    pub async fn insert_many(
        &self,
        guild_id: &str,
        players: &[LeaderboardPlayer],
    ) -> Result<(), DbErr> {
        if players.is_empty() {
            return Ok(());
        }

        let models = players.iter().map(|player| entity::guild_xp::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            user_id: ActiveValue::Set(player.id.clone()),
            nickname: ActiveValue::Set(player.username.clone()),
            avatar: ActiveValue::Set(player.avatar.clone()),
            xp: ActiveValue::Set(player.xp),
            ..Default::default()
        });

        entity::prelude::GuildXp::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::guild_xp::Column::GuildId,
                    entity::guild_xp::Column::UserId,
                ])
                .update_columns([
                    entity::guild_xp::Column::Nickname,
                    entity::guild_xp::Column::Avatar,
                    entity::guild_xp::Column::Xp,
                ])
                .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
