//! Student factory for creating test student entities.
//!
//! Inserts the student row followed by one `studentcourses` row per configured course.
//! Referenced groups and courses must already exist.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test students with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::student::StudentFactory;
///
/// let student = StudentFactory::new(&db)
///     .name("Bob")
///     .age(15)
///     .course("C1")
///     .build()
///     .await?;
/// ```
pub struct StudentFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
    group: Option<String>,
    courses: Vec<String>,
}

impl<'a> StudentFactory<'a> {
    /// Creates a new StudentFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Student {id}"` where id is auto-incremented
    /// - age: `18`
    /// - group: `None`
    /// - courses: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Student {}", id),
            age: 18,
            group: None,
            courses: Vec::new(),
        }
    }

    /// Sets the primary key name of the student.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the age of the student.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the name of the group the student belongs to.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Adds a course the student is enrolled in.
    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.courses.push(course.into());
        self
    }

    /// Builds and inserts the student entity and its course associations.
    ///
    /// # Returns
    /// - `Ok(entity::student::Model)` - Created student entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::student::Model, DbErr> {
        let student = entity::student::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            group_name: ActiveValue::Set(self.group),
        }
        .insert(self.db)
        .await?;

        for course in self.courses {
            entity::student_course::ActiveModel {
                student_name: ActiveValue::Set(student.name.clone()),
                course_name: ActiveValue::Set(course),
            }
            .insert(self.db)
            .await?;
        }

        Ok(student)
    }
}

/// Creates a student with default values and no group or courses.
///
/// Shorthand for `StudentFactory::new(db).build().await`.
pub async fn create_student(db: &DatabaseConnection) -> Result<entity::student::Model, DbErr> {
    StudentFactory::new(db).build().await
}
