//! Course factory for creating test course entities.

use crate::factory::helpers::next_id;
use entity::sea_orm_active_enums::CourseType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courses with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::course::CourseFactory;
///
/// let course = CourseFactory::new(&db)
///     .name("Algebra")
///     .course_type(CourseType::Secondary)
///     .build()
///     .await?;
/// ```
pub struct CourseFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    course_type: CourseType,
}

impl<'a> CourseFactory<'a> {
    /// Creates a new CourseFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Course {id}"` where id is auto-incremented
    /// - description: `None`
    /// - course_type: `CourseType::Main`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Course {}", id),
            description: None,
            course_type: CourseType::Main,
        }
    }

    /// Sets the primary key name of the course.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description of the course.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the type of the course.
    pub fn course_type(mut self, course_type: CourseType) -> Self {
        self.course_type = course_type;
        self
    }

    /// Builds and inserts the course entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::course::Model)` - Created course entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::course::Model, DbErr> {
        entity::course::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            course_type: ActiveValue::Set(self.course_type),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a MAIN course with default values.
///
/// Shorthand for `CourseFactory::new(db).build().await`.
pub async fn create_course(db: &DatabaseConnection) -> Result<entity::course::Model, DbErr> {
    CourseFactory::new(db).build().await
}
