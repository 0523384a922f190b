use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GuildXp::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildXp::Id))
                    .col(string(GuildXp::GuildId))
                    .col(string(GuildXp::UserId))
                    .col(string(GuildXp::Nickname))
                    .col(string(GuildXp::Avatar))
                    .col(big_integer(GuildXp::Xp))
                    .to_owned(),
            )
            .await?;

        // Create unique index for one xp row per user per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_guild_xp_guild_id_user_id")
                    .table(GuildXp::Table)
                    .col(GuildXp::GuildId)
                    .col(GuildXp::UserId)
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
                    .name("idx_guild_xp_guild_id_user_id")
                    .table(GuildXp::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GuildXp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildXp {
    Table,
    Id,
    GuildId,
    UserId,
    Nickname,
    Avatar,
    Xp,
}
