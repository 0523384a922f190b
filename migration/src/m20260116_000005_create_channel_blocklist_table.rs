use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChannelBlocklist::Table)
                    .if_not_exists()
                    .col(pk_auto(ChannelBlocklist::Id))
                    .col(string(ChannelBlocklist::GuildId))
                    .col(string_uniq(ChannelBlocklist::ChannelId))
                    .col(boolean(ChannelBlocklist::XpGain))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChannelBlocklist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelBlocklist {
    Table,
    Id,
    GuildId,
    ChannelId,
    XpGain,
}
