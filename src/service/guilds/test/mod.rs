use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use wiremock::{
    matchers::{body_string_contains, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    error::{auth::AuthError, AppError},
    service::{
        guilds::GuildListingService,
        testing::{self, guild_entry},
    },
};
