use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Course::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Course::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(string_null(Course::Description))
                    // Ordinal of the course type: 0 = MAIN, 1 = SECONDARY
                    .col(integer(Course::Type))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Course::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Course {
    #[sea_orm(iden = "courses")]
    Table,
    Name,
    Description,
    Type,
}
