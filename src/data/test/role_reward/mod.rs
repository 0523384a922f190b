use crate::{
    data::role_reward::RoleRewardRepository,
    model::leaderboard::{LeaderboardRole, LeaderboardRoleReward},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory::role_reward::RoleRewardFactory};

mod delete;
mod delete_by_guild;
mod insert_many;
mod upsert;
