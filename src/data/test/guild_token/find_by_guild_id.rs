use super::*;

/// Tests looking up a guild's stored grant.
///
/// Expected: Ok with the matching record
#[tokio::test]
async fn finds_existing_grant() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_guild_token(db, "719255152170762301").await?;

    let repo = GuildTokenRepository::new(db);
    let found = repo.find_by_guild_id("719255152170762301").await?;

    assert!(found.is_some());
    let found = found.unwrap();
    assert_eq!(found.id, stored.id);
    assert_eq!(found.guild_id, "719255152170762301");
    assert_eq!(found.access_token, stored.access_token);

    Ok(())
}

/// Tests looking up a guild that never installed the bot.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildToken)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_token(db, "719255152170762301").await?;

    let repo = GuildTokenRepository::new(db);
    let found = repo.find_by_guild_id("111222333").await?;

    assert!(found.is_none());

    Ok(())
}
