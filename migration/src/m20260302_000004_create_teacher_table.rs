use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000001_create_group_table::Group;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Teacher::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Teacher::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer(Teacher::Age))
                    .col(string_null(Teacher::TeacherGroup))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_teachers_teachergroup")
                            .from(Teacher::Table, Teacher::TeacherGroup)
                            .to(Group::Table, Group::Name)
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
            .drop_table(Table::drop().table(Teacher::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Teacher {
    #[sea_orm(iden = "teachers")]
    Table,
    Name,
    Age,
    #[sea_orm(iden = "teachergroup")]
    TeacherGroup,
}
