use reqwest::StatusCode;

use crate::{
    data::{guild_xp::GuildXpRepository, role_reward::RoleRewardRepository},
    error::AppError,
    model::leaderboard::LeaderboardPage,
    service::levels::LevelsService,
};

impl<'a> LevelsService<'a> {
    /// Imports a guild's levels from an MEE6-compatible leaderboard.
    ///
    /// Existing XP records and role rewards are wiped first, then the
    /// leaderboard is paged until an empty page. Role rewards only appear on
    /// the first page. Each page fetch gets one retry before the import gives
    /// up; a half-finished import leaves the guild reset, and running the
    /// import again starts clean.
    ///
    /// # Arguments
    /// - `guild_id`: Guild whose levels are replaced
    /// - `source`: Leaderboard provider name, currently only `MEE6`
    ///
    /// # Returns
    /// - `Ok(())`: All pages imported
    /// - `Err(AppError)`: Bad request for an unknown source, or a fetch,
    ///   decode, or store failure
    pub async fn import(&self, guild_id: &str, source: &str) -> Result<(), AppError> {
        if source != "MEE6" {
            return Err(AppError::BadRequest("Invalid source".to_string()));
        }

        self.reset(guild_id).await?;

        let mut players = Vec::new();
        let mut role_rewards = Vec::new();
        let mut page = 0;

        loop {
            let fetched = match self.fetch_page(guild_id, page).await {
                Ok(fetched) => fetched,
                Err(_) => self.fetch_page(guild_id, page).await?,
            };

            if page == 0 {
                role_rewards = fetched.role_rewards;
            }
            if fetched.players.is_empty() {
                break;
            }
            players.extend(fetched.players);
            page += 1;
        }

        GuildXpRepository::new(self.db)
            .insert_many(guild_id, &players)
            .await?;
        RoleRewardRepository::new(self.db)
            .insert_many(guild_id, &role_rewards)
            .await?;

        Ok(())
    }

    async fn fetch_page(&self, guild_id: &str, page: i64) -> Result<LeaderboardPage, AppError> {
        let response = self
            .http_client
            .get(format!(
                "{}/{}?page={}",
                self.leaderboard_base_url, guild_id, page
            ))
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::InternalError("Failed to get page".to_string()));
        }

        let fetched = response.json::<LeaderboardPage>().await.map_err(|err| {
            AppError::InternalError(format!("Failed to decode leaderboard page: {}", err))
        })?;

        Ok(fetched)
    }
}
