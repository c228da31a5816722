//! Teacher domain model and parameters.
//!
//! A teacher is always handed out together with its group and enrolled courses,
//! mirroring the nested JSON shape of the API.

use crate::{
    model::teacher::{TeacherDto, UpsertTeacherDto},
    server::model::{course::Course, group::Group},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub name: String,
    pub age: i32,
    /// Group the teacher belongs to, if any.
    pub group: Option<Group>,
    /// Courses the teacher teaches, in no particular order.
    pub courses: Vec<Course>,
}

impl Teacher {
    /// Converts entity models to a teacher domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The teacher row
    /// - `group` - The group row referenced by `entity.group_name`, if any
    /// - `courses` - The course rows linked through `teachercourses`
    pub fn from_entity(
        entity: entity::teacher::Model,
        group: Option<entity::group::Model>,
        courses: Vec<entity::course::Model>,
    ) -> Self {
        Self {
            name: entity.name,
            age: entity.age,
            group: group.map(Group::from_entity),
            courses: courses.into_iter().map(Course::from_entity).collect(),
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            name: self.name,
            age: self.age,
            group: self.group.map(Group::into_dto),
            courses: self.courses.into_iter().map(Course::into_dto).collect(),
        }
    }
}

/// Parameters for inserting or replacing a teacher keyed by name.
///
/// The course list is kept as sent, including repeats, so the association
/// uniqueness constraint can reject duplicates.
#[derive(Debug, Clone)]
pub struct UpsertTeacherParams {
    pub name: String,
    pub age: i32,
    pub group: Option<String>,
    pub courses: Vec<String>,
}

impl UpsertTeacherParams {
    pub fn from_dto(dto: UpsertTeacherDto) -> Self {
        Self {
            name: dto.name,
            age: dto.age,
            group: dto.group.map(|g| g.into_name()),
            courses: dto
                .courses
                .unwrap_or_default()
                .into_iter()
                .map(|c| c.into_name())
                .collect(),
        }
    }
}
