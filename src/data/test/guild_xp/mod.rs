use crate::{data::guild_xp::GuildXpRepository, model::leaderboard::LeaderboardPlayer};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory::guild_xp::GuildXpFactory};

mod delete_by_guild;
mod insert_many;
