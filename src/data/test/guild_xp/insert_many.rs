use super::*;

/// Tests bulk-inserting imported leaderboard players.
///
/// The leaderboard username lands in the nickname column.
///
/// Expected: Ok with one row per player
#[tokio::test]
async fn inserts_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildXp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let players = vec![
        LeaderboardPlayer {
            id: "404001".to_string(),
            username: "Alice".to_string(),
            avatar: "hash-a".to_string(),
            xp: 15_000,
        },
        LeaderboardPlayer {
            id: "404002".to_string(),
            username: "Bob".to_string(),
            avatar: "hash-b".to_string(),
            xp: 7_500,
        },
    ];

    let repo = GuildXpRepository::new(db);
    repo.insert_many("719255152170762301", &players).await?;

    let stored = entity::prelude::GuildXp::find().all(db).await?;
    assert_eq!(stored.len(), 2);

    let alice = stored.iter().find(|row| row.user_id == "404001").unwrap();
    assert_eq!(alice.nickname, "Alice");
    assert_eq!(alice.avatar, "hash-a");
    assert_eq!(alice.xp, 15_000);
    assert_eq!(alice.guild_id, "719255152170762301");

    Ok(())
}

/// Tests importing an empty leaderboard page set.
///
/// Expected: Ok with no rows inserted
#[tokio::test]
async fn accepts_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildXp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildXpRepository::new(db);
    repo.insert_many("719255152170762301", &[]).await?;

    let count = entity::prelude::GuildXp::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests re-importing a member that already has an XP row.
///
/// The (guild, user) slot is unique; a re-import must update the row instead
/// of failing.
///
/// Expected: Ok with the row updated in place
#[tokio::test]
async fn updates_existing_player_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildXp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildXpFactory::new(db)
        .guild_id("719255152170762301")
        .user_id("404001")
        .xp(100)
        .build()
        .await?;

    let players = vec![LeaderboardPlayer {
        id: "404001".to_string(),
        username: "Alice".to_string(),
        avatar: "hash-a".to_string(),
        xp: 15_000,
    }];

    let repo = GuildXpRepository::new(db);
    repo.insert_many("719255152170762301", &players).await?;

    let stored = entity::prelude::GuildXp::find().all(db).await?;
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].xp, 15_000);
    assert_eq!(stored[0].nickname, "Alice");

    Ok(())
}
