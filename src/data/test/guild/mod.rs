use crate::data::guild::GuildRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::guild::GuildFactory};

mod filter_member_ids;
