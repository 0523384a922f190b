//! Shared helpers for service tests that talk to a mock Discord server.

use oauth2::{AuthUrl, Client, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use serde_json::{json, Value};

use crate::state::OAuth2Client;

/// Builds an OAuth2 client whose token endpoint points at a mock server.
pub(crate) fn oauth_client_for(base_url: &str) -> OAuth2Client {
    Client::new(ClientId::new("123456789012345678".to_string()))
        .set_client_secret(ClientSecret::new("test-client-secret".to_string()))
        .set_auth_uri(AuthUrl::new(format!("{}/oauth2/authorize", base_url)).unwrap())
        .set_token_uri(TokenUrl::new(format!("{}/api/oauth2/token", base_url)).unwrap())
        .set_redirect_uri(
            RedirectUrl::new("http://localhost:8080/authorization".to_string()).unwrap(),
        )
}

/// HTTP client configured the same way as the production one.
pub(crate) fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

/// JSON body of a successful token grant from Discord.
pub(crate) fn token_grant_body(access_token: &str, refresh_token: &str) -> Value {
    json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": 604_800,
        "refresh_token": refresh_token,
        "scope": "identify guilds",
    })
}

/// JSON body of a Discord user identity.
pub(crate) fn identity_body(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "discriminator": "0",
        "avatar": "a1b2c3",
    })
}

/// One entry of a Discord guild listing with the given permission bitmask.
pub(crate) fn guild_entry(id: &str, permissions: &str) -> Value {
    json!({
        "id": id,
        "name": "Test Guild",
        "icon": null,
        "owner": false,
        "permissions": permissions,
        "features": [],
    })
}
