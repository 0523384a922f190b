use super::*;

/// Tests creating a role reward.
///
/// Expected: Ok with a new reward row
#[tokio::test]
async fn creates_reward() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRewardRepository::new(db);
    let reward = repo
        .upsert("719255152170762301", "606001", 10, true)
        .await?;

    assert_eq!(reward.guild_id, "719255152170762301");
    assert_eq!(reward.role_id, "606001");
    assert_eq!(reward.level, 10);
    assert!(reward.persistent);

    Ok(())
}

/// Tests updating the persistence flag of an existing reward.
///
/// The (guild, role, level) triple identifies the reward; repeating it must
/// update the row in place.
///
/// Expected: Ok with the same row updated
#[tokio::test]
async fn updates_persistence_of_existing_reward() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = RoleRewardFactory::new(db)
        .guild_id("719255152170762301")
        .role_id("606001")
        .level(10)
        .persistent(false)
        .build()
        .await?;

    let repo = RoleRewardRepository::new(db);
    let updated = repo
        .upsert("719255152170762301", "606001", 10, true)
        .await?;

    assert_eq!(updated.id, original.id);
    assert!(updated.persistent);

    let count = entity::prelude::RoleReward::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the same role at different levels produces separate rewards.
///
/// Expected: Ok with two rows
#[tokio::test]
async fn separates_rewards_by_level() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoleRewardRepository::new(db);
    repo.upsert("719255152170762301", "606001", 10, false)
        .await?;
    repo.upsert("719255152170762301", "606001", 20, false)
        .await?;

    let count = entity::prelude::RoleReward::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
