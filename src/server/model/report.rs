use crate::{
    model::report::ParticipationDto,
    server::model::{student::Student, teacher::Teacher},
};

/// Students and teachers who share a course and a group.
#[derive(Debug, Clone, PartialEq)]
pub struct Participation {
    pub students: Vec<Student>,
    pub teachers: Vec<Teacher>,
}

impl Participation {
    pub fn into_dto(self) -> ParticipationDto {
        ParticipationDto {
            students: self.students.into_iter().map(Student::into_dto).collect(),
            teachers: self.teachers.into_iter().map(Teacher::into_dto).collect(),
        }
    }
}
