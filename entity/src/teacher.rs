use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
    pub age: i32,
    #[sea_orm(column_name = "teachergroup")]
    pub group_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupName",
        to = "super::group::Column::Name",
        on_update = "Restrict",
        on_delete = "NoAction"
    )]
    Group,
    #[sea_orm(has_many = "super::teacher_course::Entity")]
    TeacherCourse,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::teacher_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeacherCourse.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::teacher_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::teacher_course::Relation::Teacher.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
