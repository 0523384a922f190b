use super::*;

/// Tests clearing all rewards of a guild.
///
/// Expected: Ok with the guild's rewards removed and others kept
#[tokio::test]
async fn removes_all_guild_rewards() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::RoleReward)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    RoleRewardFactory::new(db)
        .guild_id("719255152170762301")
        .level(10)
        .build()
        .await?;
    RoleRewardFactory::new(db)
        .guild_id("719255152170762301")
        .level(20)
        .build()
        .await?;
    RoleRewardFactory::new(db).guild_id("111222333").build().await?;

    let repo = RoleRewardRepository::new(db);
    repo.delete_by_guild("719255152170762301").await?;

    let remaining = entity::prelude::RoleReward::find()
        .filter(entity::role_reward::Column::GuildId.eq("719255152170762301"))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let others = entity::prelude::RoleReward::find()
        .filter(entity::role_reward::Column::GuildId.eq("111222333"))
        .count(db)
        .await?;
    assert_eq!(others, 1);

    Ok(())
}
