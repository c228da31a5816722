use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::EntityRefDto, course::CourseDto, group::GroupDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub name: String,
    pub age: i32,
    pub group: Option<GroupDto>,
    pub courses: Vec<CourseDto>,
}

/// Payload of `POST /students/`.
///
/// `age` defaults to 0, an absent or null `group` means the student belongs to no
/// group and absent or null `courses` means no enrollments.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertStudentDto {
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub group: Option<EntityRefDto>,
    #[serde(default)]
    pub courses: Option<Vec<EntityRefDto>>,
}
