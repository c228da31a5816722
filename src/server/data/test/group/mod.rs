use crate::server::{data::group::GroupRepository, model::group::UpsertGroupParams};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod upsert;
