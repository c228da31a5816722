use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000002_create_course_table::Course, m20260302_000004_create_teacher_table::Teacher,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeacherCourse::Table)
                    .if_not_exists()
                    .col(string(TeacherCourse::TeacherName))
                    .col(string(TeacherCourse::CourseName))
                    .primary_key(
                        Index::create()
                            .name("UniqueTeacherAndCourse")
                            .col(TeacherCourse::TeacherName)
                            .col(TeacherCourse::CourseName),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachercourses_teacher_name")
                            .from(TeacherCourse::Table, TeacherCourse::TeacherName)
                            .to(Teacher::Table, Teacher::Name)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachercourses_course_name")
                            .from(TeacherCourse::Table, TeacherCourse::CourseName)
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
            .drop_table(Table::drop().table(TeacherCourse::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeacherCourse {
    #[sea_orm(iden = "teachercourses")]
    Table,
    TeacherName,
    CourseName,
}
