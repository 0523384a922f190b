use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleReward::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleReward::Id))
                    .col(string(RoleReward::GuildId))
                    .col(string(RoleReward::RoleId))
                    .col(integer(RoleReward::Level))
                    .col(boolean(RoleReward::Persistent))
                    .to_owned(),
            )
            .await?;

        // Create unique index for one reward per role per level per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_role_reward_guild_role_level")
                    .table(RoleReward::Table)
                    .col(RoleReward::GuildId)
                    .col(RoleReward::RoleId)
                    .col(RoleReward::Level)
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
                    .name("idx_role_reward_guild_role_level")
                    .table(RoleReward::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(RoleReward::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleReward {
    Table,
    Id,
    GuildId,
    RoleId,
    Level,
    Persistent,
}
