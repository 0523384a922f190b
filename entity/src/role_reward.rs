use sea_orm::entity::prelude::*;

/// Role granted when a member reaches a level. Unique per
/// (guild, role, level); a persistent role is kept when the member earns
/// higher rewards.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role_reward")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    pub role_id: String,
    pub level: i32,
    pub persistent: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
