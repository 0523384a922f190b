/// Outcome of an OAuth code exchange or token refresh.
///
/// `expires_at` is an absolute Unix timestamp computed from the `expires_in`
/// duration Discord returns, so stored grants can be checked without knowing
/// when they were issued.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenGrant {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
    /// Guild the bot was installed into, present only for bot-install grants.
    pub guild_id: Option<String>,
}
