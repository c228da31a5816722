//! Course data repository for database operations.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashSet;

use crate::server::model::course::{Course, CourseType, UpsertCourseParams};

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a course or replaces the description and type of the existing one.
    pub async fn upsert(&self, params: UpsertCourseParams) -> Result<(), DbErr> {
        entity::prelude::Course::insert(entity::course::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            course_type: ActiveValue::Set(params.course_type.into_entity()),
        })
        .on_conflict(
            OnConflict::column(entity::course::Column::Name)
                .update_columns([
                    entity::course::Column::Description,
                    entity::course::Column::CourseType,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Course::find_by_id(name.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds the first name in `names` that has no matching course.
    ///
    /// # Returns
    /// - `Ok(Some(name))` - First unknown course name, in the order given
    /// - `Ok(None)` - Every name refers to an existing course (or `names` is empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_first_missing(&self, names: &[String]) -> Result<Option<String>, DbErr> {
        if names.is_empty() {
            return Ok(None);
        }

        let existing: HashSet<String> = entity::prelude::Course::find()
            .filter(entity::course::Column::Name.is_in(names.iter().cloned()))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| c.name)
            .collect();

        Ok(names.iter().find(|n| !existing.contains(*n)).cloned())
    }

    /// Deletes a course by name.
    ///
    /// Fails with a foreign key violation while any student or teacher is enrolled in it.
    pub async fn delete(&self, name: &str) -> Result<(), DbErr> {
        entity::prelude::Course::delete_by_id(name.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn get_all(&self) -> Result<Vec<Course>, DbErr> {
        let courses = entity::prelude::Course::find().all(self.db).await?;

        Ok(courses.into_iter().map(Course::from_entity).collect())
    }

    pub async fn count_by_type(&self, course_type: CourseType) -> Result<u64, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::CourseType.eq(course_type.into_entity()))
            .count(self.db)
            .await
    }
}
