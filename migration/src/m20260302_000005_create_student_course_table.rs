use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000002_create_course_table::Course, m20260302_000003_create_student_table::Student,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StudentCourse::Table)
                    .if_not_exists()
                    .col(string(StudentCourse::StudentName))
                    .col(string(StudentCourse::CourseName))
                    .primary_key(
                        Index::create()
                            .name("UniqueStudentAndCourse")
                            .col(StudentCourse::StudentName)
                            .col(StudentCourse::CourseName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_studentcourses_student_name")
                            .from(StudentCourse::Table, StudentCourse::StudentName)
                            .to(Student::Table, Student::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_studentcourses_course_name")
                            .from(StudentCourse::Table, StudentCourse::CourseName)
                            .to(Course::Table, Course::Name)
                            // NO ACTION keeps the SQLite error code at 787 (RESTRICT reports 1811)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StudentCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StudentCourse {
    #[sea_orm(iden = "studentcourses")]
    Table,
    StudentName,
    CourseName,
}
