use super::*;

/// Tests bulk-inserting rewards from a leaderboard import.
///
/// Imported rewards are created with the persistence flag off.
///
/// Expected: Ok with one row per imported reward
#[tokio::test]
async fn inserts_imported_rewards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let rewards = vec![
        LeaderboardRoleReward {
            level: 5,
            role: LeaderboardRole {
                id: "606001".to_string(),
                color: 0xff0000,
            },
        },
        LeaderboardRoleReward {
            level: 10,
            role: LeaderboardRole {
                id: "606002".to_string(),
                color: 0x00ff00,
            },
        },
    ];

    let repo = RoleRewardRepository::new(db);
    repo.insert_many("719255152170762301", &rewards).await?;

    let stored = entity::prelude::RoleReward::find().all(db).await?;
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|row| row.guild_id == "719255152170762301"));
    assert!(stored.iter().all(|row| !row.persistent));

    Ok(())
}

/// Tests importing a leaderboard that grants no role rewards.
///
/// Expected: Ok with no rows inserted
#[tokio::test]
async fn accepts_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRewardRepository::new(db);
    repo.insert_many("719255152170762301", &[]).await?;

    let count = entity::prelude::RoleReward::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}
