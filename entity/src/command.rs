use sea_orm::entity::prelude::*;

/// Command index row: one registered slash command per (guild, name).
///
/// `command_id` is assigned by Discord and is the join key back to the
/// upstream command registry.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "command")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub command_id: String,
    pub guild_id: String,
    pub command_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
