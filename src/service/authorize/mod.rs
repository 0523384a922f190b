//! Authorization code exchange behind the dashboard's login and bot-install
//! redirects.

use sea_orm::DatabaseConnection;

use crate::state::OAuth2Client;

pub mod install;
pub mod login;

pub struct AuthorizeService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub discord_api_base_url: &'a str,
}

impl<'a> AuthorizeService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        discord_api_base_url: &'a str,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            discord_api_base_url,
        }
    }
}
