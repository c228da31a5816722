use sea_orm::entity::prelude::*;

/// Association row linking a student to one of their courses.
///
/// The composite primary key doubles as the uniqueness guard on
/// (student, course) pairs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "studentcourses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentName",
        to = "super::student::Column::Name",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseName",
        to = "super::course::Column::Name",
        on_update = "Restrict",
        on_delete = "NoAction"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
