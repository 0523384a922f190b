use entity::prelude::*;
use sea_orm::{
    sea_query::{Alias, Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{UserToken, GuildToken};
///
/// let test = TestBuilder::new()
///     .with_table(UserToken)
///     .with_table(GuildToken)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,

    /// Unique index statements accompanying the tables.
    ///
    /// The entity schemas only carry single-column constraints; composite
    /// uniqueness lives in the migrations. The same indexes are recreated here
    /// so that upserts with composite conflict targets behave as in production.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// Initializes an empty builder ready to have entity tables added via `with_table()`.
    /// Chain method calls to configure the test environment before calling `build()`.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, plus any composite unique indexes the production migrations
    /// define for that table. The table will be created when `build()` is called.
    /// Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self.indexes
            .extend(composite_unique_indexes(entity.table_name()));
        self
    }

    /// Adds the tables required for authorization and verification flows.
    ///
    /// This convenience method adds the following tables:
    /// - UserToken
    /// - GuildToken
    ///
    /// Use this when testing verification, token refresh, or the admin guard.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_token_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_token_tables(self) -> Self {
        self.with_table(UserToken).with_table(GuildToken)
    }

    /// Adds the tables required for leveling configuration operations.
    ///
    /// This convenience method adds the following tables:
    /// - ChannelBlocklist
    /// - RoleReward
    /// - GuildXp
    ///
    /// Use this when testing blocklist, role reward, or level import functionality.
    /// Combine with `with_token_tables()` for flows that pass through the admin guard.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_leveling_tables(self) -> Self {
        self.with_table(ChannelBlocklist)
            .with_table(RoleReward)
            .with_table(GuildXp)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, followed by their unique
    /// indexes. Tables are created in the order they were added to the builder.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

/// Composite unique indexes mirroring the production migrations.
///
/// Must stay in step with the index definitions in the migration crate; the
/// repositories' upsert conflict targets depend on them.
fn composite_unique_indexes(table_name: &str) -> Vec<IndexCreateStatement> {
    match table_name {
        "command" => vec![Index::create()
            .name("idx_command_guild_id_command_name")
            .table(Alias::new("command"))
            .col(Alias::new("guild_id"))
            .col(Alias::new("command_name"))
            .unique()
            .to_owned()],
        "role_reward" => vec![Index::create()
            .name("idx_role_reward_guild_role_level")
            .table(Alias::new("role_reward"))
            .col(Alias::new("guild_id"))
            .col(Alias::new("role_id"))
            .col(Alias::new("level"))
            .unique()
            .to_owned()],
        "guild_xp" => vec![Index::create()
            .name("idx_guild_xp_guild_id_user_id")
            .table(Alias::new("guild_xp"))
            .col(Alias::new("guild_id"))
            .col(Alias::new("user_id"))
            .unique()
            .to_owned()],
        _ => Vec::new(),
    }
}
