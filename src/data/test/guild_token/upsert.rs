use super::*;

/// Tests storing a grant for a guild installing the bot for the first time.
///
/// Expected: Ok with a new grant row
#[tokio::test]
async fn creates_new_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let grant = sample_grant();

    let repo = GuildTokenRepository::new(db);
    let created = repo.upsert("719255152170762301", &grant).await?;

    assert_eq!(created.guild_id, "719255152170762301");
    assert_eq!(created.access_token, grant.access_token);
    assert_eq!(created.refresh_token, grant.refresh_token);
    assert_eq!(created.expires_at, grant.expires_at);

    Ok(())
}

/// Tests re-installing the bot in a guild that already holds a grant.
///
/// Verifies that the existing row is updated in place rather than a second
/// row being created.
///
/// Expected: Ok with the same row updated
#[tokio::test]
async fn updates_existing_grant_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::create_guild_token(db, "719255152170762301").await?;
    let grant = sample_grant();

    let repo = GuildTokenRepository::new(db);
    let updated = repo.upsert("719255152170762301", &grant).await?;

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.access_token, grant.access_token);
    assert_ne!(updated.access_token, original.access_token);

    let count = entity::prelude::GuildToken::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that upserting one guild's grant leaves other guilds untouched.
///
/// Expected: Ok with the other guild's grant unchanged
#[tokio::test]
async fn keeps_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_guild_token(db, "111222333").await?;

    let repo = GuildTokenRepository::new(db);
    repo.upsert("719255152170762301", &sample_grant()).await?;

    let unchanged = repo.find_by_guild_id("111222333").await?.unwrap();
    assert_eq!(unchanged.access_token, other.access_token);

    let count = entity::prelude::GuildToken::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
