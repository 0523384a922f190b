use crate::data::channel_blocklist::ChannelBlocklistRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory::channel_blocklist::ChannelBlocklistFactory};

mod upsert_xp_gain;
