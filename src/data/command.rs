use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::model::discord::CommandDetails;

/// Repository for the index of slash commands registered through this backend.
pub struct CommandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_guild_and_name(
        &self,
        guild_id: &str,
        command_name: &str,
    ) -> Result<Option<entity::command::Model>, DbErr> {
        entity::prelude::Command::find()
            .filter(entity::command::Column::GuildId.eq(guild_id))
            .filter(entity::command::Column::CommandName.eq(command_name))
            .one(self.db)
            .await
    }

    /// Records a command registration reported by Discord.
    ///
    /// Any stale row holding the same command ID or occupying the same
    /// (guild, name) slot is removed first, so a registration that Discord
    /// treated as an update cannot leave a duplicate behind.
    pub async fn replace(
        &self,
        details: &CommandDetails,
    ) -> Result<entity::command::Model, DbErr> {
        entity::prelude::Command::delete_many()
            .filter(entity::command::Column::CommandId.eq(&details.id))
            .exec(self.db)
            .await?;
        entity::prelude::Command::delete_many()
            .filter(entity::command::Column::GuildId.eq(&details.guild_id))
            .filter(entity::command::Column::CommandName.eq(&details.name))
            .exec(self.db)
            .await?;

        entity::prelude::Command::insert(entity::command::ActiveModel {
            command_id: ActiveValue::Set(details.id.clone()),
            guild_id: ActiveValue::Set(details.guild_id.clone()),
            command_name: ActiveValue::Set(details.name.clone()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn delete_by_command_id(&self, command_id: &str) -> Result<(), DbErr> {
        entity::prelude::Command::delete_many()
            .filter(entity::command::Column::CommandId.eq(command_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
