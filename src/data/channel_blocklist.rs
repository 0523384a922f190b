use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Repository for per-channel blocklist flags.
pub struct ChannelBlocklistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelBlocklistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets whether XP gain is blocked in a channel, creating the channel's
    /// row on first use.
    pub async fn upsert_xp_gain(
        &self,
        guild_id: &str,
        channel_id: &str,
        blocked: bool,
    ) -> Result<entity::channel_blocklist::Model, DbErr> {
        entity::prelude::ChannelBlocklist::insert(entity::channel_blocklist::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            channel_id: ActiveValue::Set(channel_id.to_string()),
            xp_gain: ActiveValue::Set(blocked),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::channel_blocklist::Column::ChannelId)
                .update_columns([entity::channel_blocklist::Column::XpGain])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
