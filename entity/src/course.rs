use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::CourseType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub description: Option<String>,
    #[sea_orm(column_name = "type")]
    pub course_type: CourseType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student_course::Entity")]
    StudentCourse,
    #[sea_orm(has_many = "super::teacher_course::Entity")]
    TeacherCourse,
}

impl Related<super::student_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StudentCourse.def()
    }
}

impl Related<super::teacher_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherCourse.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
