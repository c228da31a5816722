use crate::server::{data::student::StudentRepository, model::student::UpsertStudentParams};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, SqlErr};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod find_by_course;
mod find_by_course_and_group;
mod find_by_course_older_than;
mod find_by_group;
mod get_all;
mod upsert;

/// Counts the association rows stored for a student.
async fn enrollment_count(db: &sea_orm::DatabaseConnection, student: &str) -> Result<u64, DbErr> {
    entity::prelude::StudentCourse::find()
        .filter(entity::student_course::Column::StudentName.eq(student))
        .count(db)
        .await
}
