use sea_orm::entity::prelude::*;

/// Kind of a course, persisted as its ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
pub enum CourseType {
    #[sea_orm(num_value = 0)]
    Main,
    #[sea_orm(num_value = 1)]
    Secondary,
}
