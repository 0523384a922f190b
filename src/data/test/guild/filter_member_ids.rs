use super::*;

/// Tests filtering a guild list down to the ones the bot is a member of.
///
/// Expected: Ok with only the onboarded guild IDs
#[tokio::test]
async fn returns_only_member_guilds() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildFactory::new(db)
        .guild_id("719255152170762301")
        .build()
        .await?;
    GuildFactory::new(db).guild_id("111222333").build().await?;

    let repo = GuildRepository::new(db);
    let members = repo
        .filter_member_ids(&["719255152170762301", "999888777"])
        .await?;

    assert_eq!(members.len(), 1);
    assert!(members.contains("719255152170762301"));

    Ok(())
}

/// Tests filtering with no candidate guilds.
///
/// Expected: Ok with an empty set and no query issued
#[tokio::test]
async fn returns_empty_for_no_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildFactory::new(db).guild_id("111222333").build().await?;

    let repo = GuildRepository::new(db);
    let members = repo.filter_member_ids(&[]).await?;

    assert!(members.is_empty());

    Ok(())
}

/// Tests filtering when none of the candidates are onboarded.
///
/// Expected: Ok with an empty set
#[tokio::test]
async fn returns_empty_when_none_match() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Guild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildFactory::new(db).guild_id("111222333").build().await?;

    let repo = GuildRepository::new(db);
    let members = repo.filter_member_ids(&["444555666"]).await?;

    assert!(members.is_empty());

    Ok(())
}
