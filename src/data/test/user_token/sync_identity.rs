use super::*;

/// Tests synchronizing a session with the profile Discord reports.
///
/// Verifies that the stored profile fields are replaced with the fetched
/// identity, covering username and avatar changes since login.
///
/// Expected: Ok with updated profile fields
#[tokio::test]
async fn overwrites_profile_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user_token(db).await?;
    let token = stored.id;

    let user = DiscordUser {
        id: "555666777".to_string(),
        username: "Renamed".to_string(),
        discriminator: "0002".to_string(),
        avatar: Some("fresh-hash".to_string()),
    };

    let repo = UserTokenRepository::new(db);
    let updated = repo.sync_identity(stored, &user).await?;

    assert_eq!(updated.id, token);
    assert_eq!(updated.user_id, "555666777");
    assert_eq!(updated.username, "Renamed");
    assert_eq!(updated.discriminator, "0002");
    assert_eq!(updated.avatar, "fresh-hash");

    Ok(())
}

/// Tests that an identity sync leaves the grant untouched.
///
/// Expected: Ok with grant fields unchanged
#[tokio::test]
async fn preserves_grant_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user_token(db).await?;
    let access_token = stored.access_token.clone();
    let refresh_token = stored.refresh_token.clone();
    let expires_at = stored.expires_at;

    let repo = UserTokenRepository::new(db);
    let updated = repo.sync_identity(stored, &sample_user("42")).await?;

    assert_eq!(updated.access_token, access_token);
    assert_eq!(updated.refresh_token, refresh_token);
    assert_eq!(updated.expires_at, expires_at);

    Ok(())
}
