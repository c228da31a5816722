use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::EntityRefDto, course::CourseDto, group::GroupDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeacherDto {
    pub name: String,
    pub age: i32,
    pub group: Option<GroupDto>,
    pub courses: Vec<CourseDto>,
}

/// Payload of `POST /teachers`, same defaults as the student payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpsertTeacherDto {
    pub name: String,
    #[serde(default)]
    pub age: i32,
    #[serde(default)]
    pub group: Option<EntityRefDto>,
    #[serde(default)]
    pub courses: Option<Vec<EntityRefDto>>,
}
