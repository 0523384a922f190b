use sea_orm::entity::prelude::*;

/// User-scoped OAuth token record.
///
/// The auto-assigned `id` doubles as the opaque session token handed to the
/// frontend after login. `expires_at` is a unix timestamp in seconds.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_token")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    pub username: String,
    pub discriminator: String,
    pub avatar: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
