use super::*;

/// Tests wiping a guild's XP records.
///
/// Expected: Ok with the guild's rows removed and others kept
#[tokio::test]
async fn removes_guild_xp() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildXp)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    GuildXpFactory::new(db)
        .guild_id("719255152170762301")
        .build()
        .await?;
    GuildXpFactory::new(db)
        .guild_id("719255152170762301")
        .build()
        .await?;
    GuildXpFactory::new(db).guild_id("111222333").build().await?;

    let repo = GuildXpRepository::new(db);
    repo.delete_by_guild("719255152170762301").await?;

    let remaining = entity::prelude::GuildXp::find()
        .filter(entity::guild_xp::Column::GuildId.eq("719255152170762301"))
        .count(db)
        .await?;
    assert_eq!(remaining, 0);

    let others = entity::prelude::GuildXp::find()
        .filter(entity::guild_xp::Column::GuildId.eq("111222333"))
        .count(db)
        .await?;
    assert_eq!(others, 1);

    Ok(())
}
