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
                    .table(Student::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Student::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(integer(Student::Age))
                    .col(string_null(Student::StudentGroup))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_studentgroup")
                            .from(Student::Table, Student::StudentGroup)
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
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Student {
    #[sea_orm(iden = "students")]
    Table,
    Name,
    Age,
    #[sea_orm(iden = "studentgroup")]
    StudentGroup,
}
