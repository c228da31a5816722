use crate::server::{
    data::course::CourseRepository,
    model::course::{CourseType, UpsertCourseParams},
};
use entity::sea_orm_active_enums::CourseType as CourseTypeEntity;
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod count_by_type;
mod delete;
mod find_first_missing;
mod upsert;
