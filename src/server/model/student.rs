//! Student domain model and parameters.
//!
//! A student is always handed out together with its group and enrolled courses,
//! mirroring the nested JSON shape of the API.

use crate::{
    model::student::{StudentDto, UpsertStudentDto},
    server::model::{course::Course, group::Group},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: i32,
    /// Group the student belongs to, if any.
    pub group: Option<Group>,
    /// Courses the student is enrolled in, in no particular order.
    pub courses: Vec<Course>,
}

impl Student {
    /// Converts entity models to a student domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The student row
    /// - `group` - The group row referenced by `entity.group_name`, if any
    /// - `courses` - The course rows linked through `studentcourses`
    pub fn from_entity(
        entity: entity::student::Model,
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

    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            name: self.name,
            age: self.age,
            group: self.group.map(Group::into_dto),
            courses: self.courses.into_iter().map(Course::into_dto).collect(),
        }
    }
}

/// Parameters for inserting or replacing a student keyed by name.
///
/// The course list is kept as sent, including repeats, so the association
/// uniqueness constraint can reject duplicates.
#[derive(Debug, Clone)]
pub struct UpsertStudentParams {
    pub name: String,
    pub age: i32,
    pub group: Option<String>,
    pub courses: Vec<String>,
}

impl UpsertStudentParams {
    pub fn from_dto(dto: UpsertStudentDto) -> Self {
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
