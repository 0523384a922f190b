use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    error::AppError,
    model::discord::{CommandPermission, PermissionTargetKind},
    service::{interaction::InteractionService, testing},
};


const APPLICATION_ID: &str = "123456789012345678";
const BOT_TOKEN: &str = "test-bot-token";
const GUILD_ID: &str = "719255152170762301";

/// Registry response for a command Discord has assigned an identity to.
fn assigned_command(command_id: &str, name: &str) -> serde_json::Value {
    json!({ "id": command_id, "name": name, "guild_id": GUILD_ID })
}

async fn stored_commands(db: &sea_orm::DatabaseConnection) -> Vec<entity::command::Model> {
    entity::prelude::Command::find().all(db).await.unwrap()
}
