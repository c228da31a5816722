//! Teacher factory for creating test teacher entities.
//!
//! Inserts the teacher row followed by one `teachercourses` row per configured course.
//! Referenced groups and courses must already exist.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test teachers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::teacher::TeacherFactory;
///
/// let teacher = TeacherFactory::new(&db)
///     .name("Dana")
///     .age(45)
///     .course("C1")
///     .build()
///     .await?;
/// ```
pub struct TeacherFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    age: i32,
    group: Option<String>,
    courses: Vec<String>,
}

impl<'a> TeacherFactory<'a> {
    /// Creates a new TeacherFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Teacher {id}"` where id is auto-incremented
    /// - age: `40`
    /// - group: `None`
    /// - courses: empty
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Teacher {}", id),
            age: 40,
            group: None,
            courses: Vec::new(),
        }
    }

    /// Sets the primary key name of the teacher.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the age of the teacher.
    pub fn age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    /// Sets the name of the group the teacher belongs to.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Adds a course the teacher teaches.
    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.courses.push(course.into());
        self
    }

    /// Builds and inserts the teacher entity and its course associations.
    ///
    /// # Returns
    /// - `Ok(entity::teacher::Model)` - Created teacher entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::teacher::Model, DbErr> {
        let teacher = entity::teacher::ActiveModel {
            name: ActiveValue::Set(self.name),
            age: ActiveValue::Set(self.age),
            group_name: ActiveValue::Set(self.group),
        }
        .insert(self.db)
        .await?;

        for course in self.courses {
            entity::teacher_course::ActiveModel {
                teacher_name: ActiveValue::Set(teacher.name.clone()),
                course_name: ActiveValue::Set(course),
            }
            .insert(self.db)
            .await?;
        }

        Ok(teacher)
    }
}

/// Creates a teacher with default values and no group or courses.
///
/// Shorthand for `TeacherFactory::new(db).build().await`.
pub async fn create_teacher(db: &DatabaseConnection) -> Result<entity::teacher::Model, DbErr> {
    TeacherFactory::new(db).build().await
}
