use sea_orm::EntityTrait;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    error::AppError,
    service::{levels::LevelsService, testing},
};


const GUILD_ID: &str = "719255152170762301";

fn player(id: &str, username: &str, xp: i64) -> serde_json::Value {
    json!({ "id": id, "username": username, "avatar": "a1b2c3", "xp": xp })
}

fn page_body(page: i64, players: Vec<serde_json::Value>) -> serde_json::Value {
    json!({ "page": page, "players": players, "role_rewards": [] })
}

async fn xp_rows(db: &sea_orm::DatabaseConnection) -> Vec<entity::guild_xp::Model> {
    entity::prelude::GuildXp::find().all(db).await.unwrap()
}

async fn reward_rows(db: &sea_orm::DatabaseConnection) -> Vec<entity::role_reward::Model> {
    entity::prelude::RoleReward::find().all(db).await.unwrap()
}
