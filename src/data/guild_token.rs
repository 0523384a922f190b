use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::token::TokenGrant;

/// Repository for guild OAuth grant records, keyed by Discord guild ID.
pub struct GuildTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_guild_id(
        &self,
        guild_id: &str,
    ) -> Result<Option<entity::guild_token::Model>, DbErr> {
        entity::prelude::GuildToken::find()
            .filter(entity::guild_token::Column::GuildId.eq(guild_id))
            .one(self.db)
            .await
    }

    /// Creates or replaces the grant for a guild.
    ///
    /// Re-installing the bot and refreshing an existing grant both land here;
    /// a guild holds at most one grant at a time.
    pub async fn upsert(
        &self,
        guild_id: &str,
        grant: &TokenGrant,
    ) -> Result<entity::guild_token::Model, DbErr> {
        entity::prelude::GuildToken::insert(entity::guild_token::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            access_token: ActiveValue::Set(grant.access_token.clone()),
            refresh_token: ActiveValue::Set(grant.refresh_token.clone()),
            expires_at: ActiveValue::Set(grant.expires_at),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild_token::Column::GuildId)
                .update_columns([
                    entity::guild_token::Column::AccessToken,
                    entity::guild_token::Column::RefreshToken,
                    entity::guild_token::Column::ExpiresAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }
}
