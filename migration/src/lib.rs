pub use sea_orm_migration::prelude::*;

mod m20260302_000001_create_group_table;
mod m20260302_000002_create_course_table;
mod m20260302_000003_create_student_table;
mod m20260302_000004_create_teacher_table;
mod m20260302_000005_create_student_course_table;
mod m20260302_000006_create_teacher_course_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_group_table::Migration),
            Box::new(m20260302_000002_create_course_table::Migration),
            Box::new(m20260302_000003_create_student_table::Migration),
            Box::new(m20260302_000004_create_teacher_table::Migration),
            Box::new(m20260302_000005_create_student_course_table::Migration),
            Box::new(m20260302_000006_create_teacher_course_table::Migration),
        ]
    }
}
