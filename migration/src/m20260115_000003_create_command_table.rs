use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Command::Table)
                    .if_not_exists()
                    .col(pk_auto(Command::Id))
                    .col(string_uniq(Command::CommandId))
                    .col(string(Command::GuildId))
                    .col(string(Command::CommandName))
                    .to_owned(),
            )
            .await?;

        // Create unique index for one registration per command name per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_command_guild_id_command_name")
                    .table(Command::Table)
                    .col(Command::GuildId)
                    .col(Command::CommandName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_command_guild_id_command_name")
                    .table(Command::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Command::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Command {
    Table,
    Id,
    CommandId,
    GuildId,
    CommandName,
}
