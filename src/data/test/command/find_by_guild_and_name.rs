use super::*;

/// Tests finding a registered command by guild and name.
///
/// Expected: Ok with the matching row
#[tokio::test]
async fn finds_matching_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_command(db, "719255152170762301", "level").await?;

    let repo = CommandRepository::new(db);
    let found = repo
        .find_by_guild_and_name("719255152170762301", "level")
        .await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().command_id, stored.command_id);

    Ok(())
}

/// Tests that the lookup is scoped to the guild.
///
/// The same command name registered in another guild must not match.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command(db, "111222333", "level").await?;

    let repo = CommandRepository::new(db);
    let found = repo
        .find_by_guild_and_name("719255152170762301", "level")
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that the lookup is scoped to the command name.
///
/// Expected: Ok with None
#[tokio::test]
async fn returns_none_for_other_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command(db, "719255152170762301", "level").await?;

    let repo = CommandRepository::new(db);
    let found = repo
        .find_by_guild_and_name("719255152170762301", "test")
        .await?;

    assert!(found.is_none());

    Ok(())
}
