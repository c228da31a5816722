use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{student::StudentDto, teacher::TeacherDto};

/// Students and teachers sharing both a course and a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipationDto {
    pub students: Vec<StudentDto>,
    pub teachers: Vec<TeacherDto>,
}
