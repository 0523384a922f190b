use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildToken::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildToken::Id))
                    .col(string_uniq(GuildToken::GuildId))
                    .col(string(GuildToken::AccessToken))
                    .col(string(GuildToken::RefreshToken))
                    .col(big_integer(GuildToken::ExpiresAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildToken {
    Table,
    Id,
    GuildId,
    AccessToken,
    RefreshToken,
    ExpiresAt,
}
