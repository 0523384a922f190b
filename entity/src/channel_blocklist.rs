use sea_orm::entity::prelude::*;

/// Per-channel feature blocklist. One row per channel; flags are toggled in
/// place, currently only whether XP gain is blocked in the channel.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "channel_blocklist")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: String,
    #[sea_orm(unique)]
    pub channel_id: String,
    pub xp_gain: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
