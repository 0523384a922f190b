//! Channel blocklist configuration.

use sea_orm::DatabaseConnection;

use crate::{data::channel_blocklist::ChannelBlocklistRepository, error::AppError};

/// Service toggling per-channel blocklist flags.
pub struct BlocklistService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BlocklistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets a channel's entry on the named list.
    ///
    /// `xpgain` is the only list currently maintained; the name travels on the
    /// wire so the bot can grow more lists without a format change.
    ///
    /// # Arguments
    /// - `guild_id`: Guild the channel belongs to
    /// - `channel_id`: Channel being listed or unlisted
    /// - `list_type`: Which list to modify, currently only `xpgain`
    /// - `blocked`: Whether the channel goes on or off the list
    ///
    /// # Returns
    /// - `Ok(entity::channel_blocklist::Model)`: The channel's updated row
    /// - `Err(AppError)`: Bad request for an unknown list, or a store failure
    pub async fn update(
        &self,
        guild_id: &str,
        channel_id: &str,
        list_type: &str,
        blocked: bool,
    ) -> Result<entity::channel_blocklist::Model, AppError> {
        if list_type != "xpgain" {
            return Err(AppError::BadRequest("Invalid list type".to_string()));
        }

        let row = ChannelBlocklistRepository::new(self.db)
            .upsert_xp_gain(guild_id, channel_id, blocked)
            .await?;

        Ok(row)
    }
}
