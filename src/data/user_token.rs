use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::model::{discord::DiscordUser, token::TokenGrant};

/// Repository for user session records.
///
/// The auto-assigned row ID is the session token handed to the dashboard, so
/// lookups key on the primary key directly.
pub struct UserTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a session record by its session token.
    pub async fn find_by_id(
        &self,
        token: i64,
    ) -> Result<Option<entity::user_token::Model>, DbErr> {
        entity::prelude::UserToken::find_by_id(token).one(self.db).await
    }

    /// Stores a fresh login, returning the created row whose ID becomes the
    /// caller's session token.
    pub async fn create(
        &self,
        user: &DiscordUser,
        grant: &TokenGrant,
    ) -> Result<entity::user_token::Model, DbErr> {
        entity::prelude::UserToken::insert(entity::user_token::ActiveModel {
            user_id: ActiveValue::Set(user.id.clone()),
            access_token: ActiveValue::Set(grant.access_token.clone()),
            refresh_token: ActiveValue::Set(grant.refresh_token.clone()),
            expires_at: ActiveValue::Set(grant.expires_at),
            username: ActiveValue::Set(user.username.clone()),
            discriminator: ActiveValue::Set(user.discriminator.clone()),
            avatar: ActiveValue::Set(user.avatar.clone().unwrap_or_default()),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    /// Overwrites the stored grant after a token refresh. Profile fields are
    /// left untouched.
    pub async fn update_grant(
        &self,
        record: entity::user_token::Model,
        grant: &TokenGrant,
    ) -> Result<entity::user_token::Model, DbErr> {
        let mut active: entity::user_token::ActiveModel = record.into();
        active.access_token = ActiveValue::Set(grant.access_token.clone());
        active.refresh_token = ActiveValue::Set(grant.refresh_token.clone());
        active.expires_at = ActiveValue::Set(grant.expires_at);

        active.update(self.db).await
    }

    /// Synchronizes the stored profile with the identity Discord currently
    /// reports for the session's access token.
    pub async fn sync_identity(
        &self,
        record: entity::user_token::Model,
        user: &DiscordUser,
    ) -> Result<entity::user_token::Model, DbErr> {
        let mut active: entity::user_token::ActiveModel = record.into();
        active.user_id = ActiveValue::Set(user.id.clone());
        active.username = ActiveValue::Set(user.username.clone());
        active.discriminator = ActiveValue::Set(user.discriminator.clone());
        active.avatar = ActiveValue::Set(user.avatar.clone().unwrap_or_default());

        active.update(self.db).await
    }
}
