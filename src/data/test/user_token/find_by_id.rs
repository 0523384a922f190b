use super::*;

/// Tests looking up a session by its token.
///
/// Verifies that a stored session row is returned when queried by the row ID
/// that serves as the session token.
///
/// Expected: Ok with the matching record
#[tokio::test]
async fn finds_existing_session() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_user_token(db).await?;

    let repo = UserTokenRepository::new(db);
    let found = repo.find_by_id(stored.id).await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, stored.id);
    assert_eq!(found.user_id, stored.user_id);
    assert_eq!(found.access_token, stored.access_token);

    Ok(())
}

/// Tests looking up a token that was never issued.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_token() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::UserToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_token(db).await?;

    let repo = UserTokenRepository::new(db);
    let found = repo.find_by_id(999_999).await?;

    assert!(found.is_none());

    Ok(())
}
