use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{course::CourseRepository, group::GroupRepository, teacher::TeacherRepository},
    error::{
        constraint::{classify_association_write, ConstraintError, ReferenceKind},
        AppError,
    },
    model::teacher::{Teacher, UpsertTeacherParams},
};

pub struct TeacherService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeacherService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or replaces a teacher in one transaction.
    ///
    /// The group is checked before the courses, which are checked in the order given; the
    /// first unknown reference aborts the write. Nothing is persisted on any failure.
    ///
    /// # Returns
    /// - `Ok(())` - Teacher written
    /// - `Err(AppError::ConstraintErr(InvalidReference))` - Unknown group or course
    /// - `Err(AppError::ConstraintErr(DuplicateAssociation))` - A course is listed twice
    /// - `Err(AppError::DbErr)` - Any other database failure
    pub async fn upsert(&self, params: UpsertTeacherParams) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        if let Some(group) = &params.group {
            if !GroupRepository::new(&txn).exists(group).await? {
                return Err(ConstraintError::InvalidReference {
                    kind: ReferenceKind::Group,
                    name: group.clone(),
                }
                .into());
            }
        }

        if let Some(course) = CourseRepository::new(&txn)
            .find_first_missing(&params.courses)
            .await?
        {
            return Err(ConstraintError::InvalidReference {
                kind: ReferenceKind::Course,
                name: course,
            }
            .into());
        }

        TeacherRepository::new(&txn)
            .upsert(params)
            .await
            .map_err(classify_association_write)?;

        txn.commit().await?;

        Ok(())
    }

    /// Deletes a teacher.
    /// Returns false if no teacher has this name.
    pub async fn delete(&self, name: &str) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = TeacherRepository::new(&txn);

        if !repo.exists(name).await? {
            return Ok(false);
        }

        repo.delete(name).await?;
        txn.commit().await?;

        Ok(true)
    }

    pub async fn get_all(&self) -> Result<Vec<Teacher>, AppError> {
        Ok(TeacherRepository::new(self.db).get_all().await?)
    }

    pub async fn count(&self) -> Result<u64, AppError> {
        Ok(TeacherRepository::new(self.db).count().await?)
    }
}
