use crate::{data::guild_token::GuildTokenRepository, model::token::TokenGrant};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod find_by_guild_id;
mod upsert;

fn sample_grant() -> TokenGrant {
    TokenGrant {
        access_token: "guild-access-new".to_string(),
        refresh_token: "guild-refresh-new".to_string(),
        expires_at: Utc::now().timestamp() + 3600,
        guild_id: None,
    }
}
