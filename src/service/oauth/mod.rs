//! OAuth2 token exchange with Discord

use chrono::Utc;
use oauth2::{basic::BasicTokenType, StandardTokenResponse, TokenResponse};

use crate::{
    model::{discord::DiscordTokenFields, token::TokenGrant},
    state::OAuth2Client,
};

pub mod exchange;
pub mod refresh;

/// Token response shape returned by Discord's token endpoint.
pub type DiscordTokenResponse = StandardTokenResponse<DiscordTokenFields, BasicTokenType>;

pub struct OauthService<'a> {
    pub oauth_client: &'a OAuth2Client,
    pub http_client: &'a reqwest::Client,
}

impl<'a> OauthService<'a> {
    pub fn new(oauth_client: &'a OAuth2Client, http_client: &'a reqwest::Client) -> Self {
        Self {
            oauth_client,
            http_client,
        }
    }
}

/// Converts a raw token response into the grant shape stored in the database.
///
/// Discord may omit the refresh token on a refresh grant; `previous_refresh_token`
/// carries the still-valid old value forward in that case.
fn grant_from_response(token: &DiscordTokenResponse, previous_refresh_token: &str) -> TokenGrant {
    let expires_in = token
        .expires_in()
        .map(|duration| duration.as_secs() as i64)
        .unwrap_or_default();

    TokenGrant {
        access_token: token.access_token().secret().to_string(),
        refresh_token: token
            .refresh_token()
            .map(|refresh| refresh.secret().to_string())
            .unwrap_or_else(|| previous_refresh_token.to_string()),
        expires_at: Utc::now().timestamp() + expires_in,
        guild_id: token
            .extra_fields()
            .guild
            .as_ref()
            .map(|guild| guild.id.clone()),
    }
}

#[cfg(test)]
mod test;
