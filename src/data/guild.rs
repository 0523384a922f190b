use std::collections::HashSet;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

/// Repository for the set of guilds the bot is currently a member of.
///
/// This backend never writes the table; the bot process maintains it as it
/// joins and leaves guilds.
pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the subset of `guild_ids` the bot is a member of.
    pub async fn filter_member_ids(
        &self,
        guild_ids: &[&str],
    ) -> Result<HashSet<String>, DbErr> {
        if guild_ids.is_empty() {
            return Ok(HashSet::new());
        }

        let rows = entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.is_in(guild_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.guild_id).collect())
    }
}
