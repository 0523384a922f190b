pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_user_token_table;
mod m20260115_000002_create_guild_token_table;
mod m20260115_000003_create_command_table;
mod m20260116_000004_create_guild_table;
mod m20260116_000005_create_channel_blocklist_table;
mod m20260116_000006_create_role_reward_table;
mod m20260116_000007_create_guild_xp_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_user_token_table::Migration),
            Box::new(m20260115_000002_create_guild_token_table::Migration),
            Box::new(m20260115_000003_create_command_table::Migration),
            Box::new(m20260116_000004_create_guild_table::Migration),
            Box::new(m20260116_000005_create_channel_blocklist_table::Migration),
            Box::new(m20260116_000006_create_role_reward_table::Migration),
            Box::new(m20260116_000007_create_guild_xp_table::Migration),
        ]
    }
}
