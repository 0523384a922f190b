use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserToken::Table)
                    .if_not_exists()
                    .col(big_pk_auto(UserToken::Id))
                    .col(string(UserToken::UserId))
                    .col(string(UserToken::AccessToken))
                    .col(string(UserToken::RefreshToken))
                    .col(big_integer(UserToken::ExpiresAt))
                    .col(string(UserToken::Username))
                    .col(string(UserToken::Discriminator))
                    .col(string(UserToken::Avatar))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserToken {
    Table,
    Id,
    UserId,
    AccessToken,
    RefreshToken,
    ExpiresAt,
    Username,
    Discriminator,
    Avatar,
}
