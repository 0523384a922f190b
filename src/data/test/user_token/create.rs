use super::*;

/// Tests storing a fresh login.
///
/// Verifies that the created row carries the Discord profile and grant fields
/// and that its auto-assigned ID is usable as a session token.
///
/// Expected: Ok with a stored session row
#[tokio::test]
async fn creates_session_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = sample_user("100200300");
    let grant = sample_grant();

    let repo = UserTokenRepository::new(db);
    let created = repo.create(&user, &grant).await?;

    assert!(created.id > 0);
    assert_eq!(created.user_id, "100200300");
    assert_eq!(created.username, "Tester");
    assert_eq!(created.discriminator, "0001");
    assert_eq!(created.avatar, "a1b2c3");
    assert_eq!(created.access_token, grant.access_token);
    assert_eq!(created.refresh_token, grant.refresh_token);
    assert_eq!(created.expires_at, grant.expires_at);

    Ok(())
}

/// Tests logging in twice with the same Discord account.
///
/// Each login issues a separate session, so the same user can be signed in
/// from multiple browsers.
///
/// Expected: Ok with two rows holding distinct tokens
#[tokio::test]
async fn assigns_distinct_tokens_per_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = sample_user("100200300");
    let grant = sample_grant();

    let repo = UserTokenRepository::new(db);
    let first = repo.create(&user, &grant).await?;
    let second = repo.create(&user, &grant).await?;

    assert_ne!(first.id, second.id);

    let count = entity::prelude::UserToken::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}

/// Tests storing a login for a user without an avatar.
///
/// Discord reports a null avatar for users with the default one; the record
/// stores an empty string in that case.
///
/// Expected: Ok with empty avatar
#[tokio::test]
async fn stores_empty_avatar_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut user = sample_user("100200300");
    user.avatar = None;

    let repo = UserTokenRepository::new(db);
    let created = repo.create(&user, &sample_grant()).await?;

    assert_eq!(created.avatar, "");

    Ok(())
}
