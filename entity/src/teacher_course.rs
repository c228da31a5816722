use sea_orm::entity::prelude::*;

/// Association row linking a teacher to one of their courses.
///
/// The composite primary key doubles as the uniqueness guard on
/// (teacher, course) pairs.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachercourses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub teacher_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub course_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::teacher::Entity",
        from = "Column::TeacherName",
        to = "super::teacher::Column::Name",
        on_update = "Restrict",
        on_delete = "Cascade"
    )]
    Teacher,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseName",
        to = "super::course::Column::Name",
        on_update = "Restrict",
        on_delete = "NoAction"
    )]
    Course,
}

impl Related<super::teacher::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Teacher.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
