use chrono::Utc;
use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use wiremock::{
    matchers::{body_string_contains, header, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    error::{auth::AuthError, AppError},
    service::{
        testing::{self, guild_entry},
        verify::{GuildVerificationService, PermissionService, UserVerificationService},
    },
};
