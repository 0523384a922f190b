use oauth2::{RefreshToken, RequestTokenError};

use crate::{
    error::{auth::AuthError, AppError},
    model::token::TokenGrant,
    service::oauth::{grant_from_response, OauthService},
};

impl<'a> OauthService<'a> {
    /// Trades a refresh token for a new access token grant.
    ///
    /// A rejected refresh token means the stored grant is no longer usable and
    /// the caller must log in again, so rejections surface as an auth failure
    /// rather than an upstream outage.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenGrant, AppError> {
        let refresh = RefreshToken::new(refresh_token.to_string());

        let token = self
            .oauth_client
            .exchange_refresh_token(&refresh)
            .request_async(self.http_client)
            .await
            .map_err(|err| match err {
                RequestTokenError::Request(source) => AppError::FailedDependency(format!(
                    "Discord token request failed: {}",
                    source
                )),
                _ => AppError::from(AuthError::RefreshRejected),
            })?;

        Ok(grant_from_response(&token, refresh_token))
    }
}
