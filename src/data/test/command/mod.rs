use crate::{data::command::CommandRepository, model::discord::CommandDetails};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_command_id;
mod find_by_guild_and_name;
mod replace;
