use sea_orm::entity::prelude::*;

/// Accumulated XP per member per guild. Display fields are denormalized so
/// the leaderboard renders without extra Discord lookups.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild_xp")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub nickname: String,
    pub avatar: String,
    pub xp: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
