use super::*;

/// Tests blocking XP gain in a channel with no existing row.
///
/// Expected: Ok with a new blocklist row
#[tokio::test]
async fn creates_channel_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelBlocklist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelBlocklistRepository::new(db);
    let row = repo
        .upsert_xp_gain("719255152170762301", "808011", true)
        .await?;

    assert_eq!(row.guild_id, "719255152170762301");
    assert_eq!(row.channel_id, "808011");
    assert!(row.xp_gain);

    Ok(())
}

/// Tests toggling the flag on an already-listed channel.
///
/// Verifies that the existing row is updated in place.
///
/// Expected: Ok with the same row updated
#[tokio::test]
async fn updates_existing_channel_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelBlocklist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = ChannelBlocklistFactory::new(db)
        .channel_id("808011")
        .xp_gain(true)
        .build()
        .await?;

    let repo = ChannelBlocklistRepository::new(db);
    let updated = repo
        .upsert_xp_gain(&original.guild_id, "808011", false)
        .await?;

    assert_eq!(updated.id, original.id);
    assert!(!updated.xp_gain);

    let count = entity::prelude::ChannelBlocklist::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that flags are tracked per channel.
///
/// Expected: Ok with independent rows per channel
#[tokio::test]
async fn tracks_channels_independently() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ChannelBlocklist)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ChannelBlocklistRepository::new(db);
    repo.upsert_xp_gain("719255152170762301", "808011", true)
        .await?;
    repo.upsert_xp_gain("719255152170762301", "808022", false)
        .await?;

    let count = entity::prelude::ChannelBlocklist::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
