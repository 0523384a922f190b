use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::{
    controller::{authorize, blocklist, guilds, interaction, levels, role_reward, verify, webhook},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/authorize/discord", post(authorize::login))
        .route("/api/authorize/guild", post(authorize::install))
        .route("/api/verify/user", post(verify::verify_user))
        .route("/api/verify/guild", post(verify::verify_guild))
        .route("/api/verify/permission", post(verify::confirm_permission))
        .route("/api/guilds", get(guilds::list))
        .route(
            "/api/interaction",
            put(interaction::register).delete(interaction::remove),
        )
        .route(
            "/api/interaction/permissions",
            patch(interaction::update_permissions),
        )
        .route("/api/blocklist", post(blocklist::update))
        .route("/api/rolereward", post(role_reward::update))
        .route("/api/levels", post(levels::modify))
        .route("/api/interactions", post(webhook::interactions))
}
