use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::course::CourseRepository,
    error::{
        constraint::{classify_reference_delete, ReferenceKind},
        AppError,
    },
    model::course::{Course, CourseType, UpsertCourseParams},
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn upsert(&self, params: UpsertCourseParams) -> Result<(), AppError> {
        Ok(CourseRepository::new(self.db).upsert(params).await?)
    }

    /// Deletes a course that nobody is enrolled in.
    ///
    /// # Returns
    /// - `Ok(true)` - Course deleted
    /// - `Ok(false)` - No course has this name
    /// - `Err(AppError::ConstraintErr(StillReferenced))` - A student or teacher still
    ///   references the course
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = CourseRepository::new(&txn);

        if !repo.exists(name).await? {
            return Ok(false);
        }

        repo.delete(name)
            .await
            .map_err(|e| classify_reference_delete(e, ReferenceKind::Course, name))?;
        txn.commit().await?;

        Ok(true)
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db).get_all().await?)
    }

    pub async fn count_by_type(&self, course_type: CourseType) -> Result<u64, AppError> {
        Ok(CourseRepository::new(self.db)
            .count_by_type(course_type)
            .await?)
    }
}
