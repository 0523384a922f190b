use super::*;

/// Tests recording a first-time registration.
///
/// Expected: Ok with a single index row
#[tokio::test]
async fn creates_index_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let details = CommandDetails {
        id: "900100".to_string(),
        name: "level".to_string(),
        guild_id: "719255152170762301".to_string(),
    };

    let repo = CommandRepository::new(db);
    let stored = repo.replace(&details).await?;

    assert_eq!(stored.command_id, "900100");
    assert_eq!(stored.guild_id, "719255152170762301");
    assert_eq!(stored.command_name, "level");

    let count = entity::prelude::Command::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests re-registering a command that already occupies the (guild, name)
/// slot.
///
/// Discord may assign a new command ID on re-creation; the stale row must be
/// replaced so exactly one row remains for the slot.
///
/// Expected: Ok with one row holding the new command ID
#[tokio::test]
async fn replaces_row_in_same_slot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command(db, "719255152170762301", "level").await?;

    let details = CommandDetails {
        id: "900200".to_string(),
        name: "level".to_string(),
        guild_id: "719255152170762301".to_string(),
    };

    let repo = CommandRepository::new(db);
    repo.replace(&details).await?;

    let rows = entity::prelude::Command::find()
        .filter(entity::command::Column::GuildId.eq("719255152170762301"))
        .filter(entity::command::Column::CommandName.eq("level"))
        .all(db)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].command_id, "900200");

    Ok(())
}

/// Tests that a row holding the same command ID is evicted first.
///
/// Guards the unique command ID column against a registration Discord
/// reported under an ID already present in the index.
///
/// Expected: Ok with the old row gone
#[tokio::test]
async fn removes_stale_row_with_same_command_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stale = factory::create_command(db, "111222333", "level").await?;

    let details = CommandDetails {
        id: stale.command_id.clone(),
        name: "level".to_string(),
        guild_id: "719255152170762301".to_string(),
    };

    let repo = CommandRepository::new(db);
    repo.replace(&details).await?;

    let rows = entity::prelude::Command::find()
        .filter(entity::command::Column::CommandId.eq(stale.command_id))
        .all(db)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].guild_id, "719255152170762301");

    let count = entity::prelude::Command::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that registrations in other guilds are untouched.
///
/// Expected: Ok with the other guild's row intact
#[tokio::test]
async fn keeps_other_guild_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_command(db, "111222333", "level").await?;

    let details = CommandDetails {
        id: "900300".to_string(),
        name: "level".to_string(),
        guild_id: "719255152170762301".to_string(),
    };

    let repo = CommandRepository::new(db);
    repo.replace(&details).await?;

    let kept = repo.find_by_guild_and_name("111222333", "level").await?;
    assert_eq!(kept.unwrap().command_id, other.command_id);

    Ok(())
}
