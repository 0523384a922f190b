use oauth2::{AuthorizationCode, RequestTokenError};

use crate::{
    error::AppError,
    model::token::TokenGrant,
    service::oauth::{grant_from_response, OauthService},
};

impl<'a> OauthService<'a> {
    /// Exchanges an OAuth2 authorization code for an access token grant.
    ///
    /// Serves both the user login flow and the bot install flow; the install
    /// flow additionally carries the target guild in the token response.
    pub async fn exchange_code(&self, code: String) -> Result<TokenGrant, AppError> {
        let auth_code = AuthorizationCode::new(code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|err| match err {
                RequestTokenError::Request(source) => AppError::FailedDependency(format!(
                    "Discord token request failed: {}",
                    source
                )),
                other => AppError::InternalError(format!(
                    "Failed to get access token from discord: {}",
                    other
                )),
            })?;

        Ok(grant_from_response(&token, ""))
    }
}
