//! Read-only reports over students and teachers.
//!
//! Reports never fail because a course or group is unknown; they simply match nothing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{student::StudentRepository, teacher::TeacherRepository},
    error::AppError,
    model::{report::Participation, student::Student},
};

pub struct ReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn students_in_course(&self, course: &str) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db)
            .find_by_course(course)
            .await?)
    }

    pub async fn students_in_group(&self, group: &str) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).find_by_group(group).await?)
    }

    /// Gets the students and the teachers that are both in `course` and in `group`.
    pub async fn participation(&self, group: &str, course: &str) -> Result<Participation, AppError> {
        let students = StudentRepository::new(self.db)
            .find_by_course_and_group(course, group)
            .await?;
        let teachers = TeacherRepository::new(self.db)
            .find_by_course_and_group(course, group)
            .await?;

        Ok(Participation { students, teachers })
    }

    /// Gets the students of `course` strictly older than `age`.
    pub async fn students_older_than_in_course(
        &self,
        age: i32,
        course: &str,
    ) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db)
            .find_by_course_older_than(course, age)
            .await?)
    }
}
