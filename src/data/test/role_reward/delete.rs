use super::*;

/// Tests removing a reward by its (guild, role, level) triple.
///
/// Expected: Ok with the row removed
#[tokio::test]
async fn removes_exact_reward() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RoleRewardFactory::new(db)
        .guild_id("719255152170762301")
        .role_id("606001")
        .level(10)
        .build()
        .await?;

    let repo = RoleRewardRepository::new(db);
    repo.delete("719255152170762301", "606001", 10).await?;

    let count = entity::prelude::RoleReward::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests that deletion only matches the exact level.
///
/// Expected: Ok with the other level's reward kept
#[tokio::test]
async fn leaves_other_levels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RoleRewardFactory::new(db)
        .guild_id("719255152170762301")
        .role_id("606001")
        .level(10)
        .build()
        .await?;
    RoleRewardFactory::new(db)
        .guild_id("719255152170762301")
        .role_id("606001")
        .level(20)
        .build()
        .await?;

    let repo = RoleRewardRepository::new(db);
    repo.delete("719255152170762301", "606001", 10).await?;

    let remaining = entity::prelude::RoleReward::find().all(db).await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].level, 20);

    Ok(())
}
