use sea_orm::entity::prelude::*;

/// Guilds the bot is currently a member of.
///
/// Written by the bot-side consumer when it joins or leaves a guild; this
/// backend only reads it for the "bot is member" check in the guild listing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
