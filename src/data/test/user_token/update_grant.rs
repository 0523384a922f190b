use super::*;

/// Tests overwriting a session's grant after a refresh.
///
/// Verifies that the access token, refresh token and expiry are replaced on
/// the existing row.
///
/// Expected: Ok with updated grant fields
#[tokio::test]
async fn overwrites_grant_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user_token(db).await?;
    let token = stored.id;
    let grant = sample_grant();

    let repo = UserTokenRepository::new(db);
    let updated = repo.update_grant(stored, &grant).await?;

    assert_eq!(updated.id, token);
    assert_eq!(updated.access_token, grant.access_token);
    assert_eq!(updated.refresh_token, grant.refresh_token);
    assert_eq!(updated.expires_at, grant.expires_at);

    Ok(())
}

/// Tests that refreshing a grant does not touch the stored profile.
///
/// Expected: Ok with profile fields unchanged
#[tokio::test]
async fn preserves_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user_token(db).await?;
    let user_id = stored.user_id.clone();
    let username = stored.username.clone();
    let avatar = stored.avatar.clone();

    let repo = UserTokenRepository::new(db);
    let updated = repo.update_grant(stored, &sample_grant()).await?;

    assert_eq!(updated.user_id, user_id);
    assert_eq!(updated.username, username);
    assert_eq!(updated.avatar, avatar);

    Ok(())
}
