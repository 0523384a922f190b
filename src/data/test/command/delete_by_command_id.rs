use super::*;

/// Tests removing a command's index row by its Discord command ID.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn deletes_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_command(db, "719255152170762301", "level").await?;

    let repo = CommandRepository::new(db);
    repo.delete_by_command_id(&stored.command_id).await?;

    let count = entity::prelude::Command::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests deleting a command ID with no index row.
///
/// Expected: Ok with other rows untouched
#[tokio::test]
async fn ignores_unknown_command_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Command)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_command(db, "719255152170762301", "level").await?;

    let repo = CommandRepository::new(db);
    repo.delete_by_command_id("does-not-exist").await?;

    let count = entity::prelude::Command::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}
