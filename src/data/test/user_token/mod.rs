use crate::{
    data::user_token::UserTokenRepository,
    model::{discord::DiscordUser, token::TokenGrant},
};
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_id;
mod sync_identity;
mod update_grant;

fn sample_user(id: &str) -> DiscordUser {
    DiscordUser {
        id: id.to_string(),
        username: "Tester".to_string(),
        discriminator: "0001".to_string(),
        avatar: Some("a1b2c3".to_string()),
    }
}

fn sample_grant() -> TokenGrant {
    TokenGrant {
        access_token: "access-abc".to_string(),
        refresh_token: "refresh-abc".to_string(),
        expires_at: Utc::now().timestamp() + 3600,
        guild_id: None,
    }
}
