//! Teacher data repository for database operations.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::teacher::{Teacher, UpsertTeacherParams};

pub struct TeacherRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeacherRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a teacher or replaces the existing one with the same name.
    ///
    /// Same semantics as `StudentRepository::upsert`: age and group are overwritten and
    /// the course set is replaced wholesale.
    pub async fn upsert(&self, params: UpsertTeacherParams) -> Result<(), DbErr> {
        entity::prelude::Teacher::insert(entity::teacher::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            age: ActiveValue::Set(params.age),
            group_name: ActiveValue::Set(params.group),
        })
        .on_conflict(
            OnConflict::column(entity::teacher::Column::Name)
                .update_columns([
                    entity::teacher::Column::Age,
                    entity::teacher::Column::GroupName,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        entity::prelude::TeacherCourse::delete_many()
            .filter(entity::teacher_course::Column::TeacherName.eq(params.name.as_str()))
            .exec(self.db)
            .await?;

        for course in params.courses {
            entity::prelude::TeacherCourse::insert(entity::teacher_course::ActiveModel {
                teacher_name: ActiveValue::Set(params.name.clone()),
                course_name: ActiveValue::Set(course),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Teacher::find_by_id(name.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a teacher by name; its course associations cascade.
    pub async fn delete(&self, name: &str) -> Result<(), DbErr> {
        entity::prelude::Teacher::delete_by_id(name.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Teacher::find().count(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<Teacher>, DbErr> {
        let teachers = entity::prelude::Teacher::find().all(self.db).await?;

        self.with_relations(teachers).await
    }

    /// Gets teachers teaching `course` that also belong to `group`.
    pub async fn find_by_course_and_group(
        &self,
        course: &str,
        group: &str,
    ) -> Result<Vec<Teacher>, DbErr> {
        let teachers = entity::prelude::Teacher::find()
            .inner_join(entity::prelude::TeacherCourse)
            .filter(entity::teacher_course::Column::CourseName.eq(course))
            .filter(entity::teacher::Column::GroupName.eq(group))
            .all(self.db)
            .await?;

        self.with_relations(teachers).await
    }

    async fn with_relations(
        &self,
        teachers: Vec<entity::teacher::Model>,
    ) -> Result<Vec<Teacher>, DbErr> {
        if teachers.is_empty() {
            return Ok(Vec::new());
        }

        let group_names: Vec<String> = teachers
            .iter()
            .filter_map(|t| t.group_name.clone())
            .collect();
        let groups_map: HashMap<String, entity::group::Model> = if !group_names.is_empty() {
            entity::prelude::Group::find()
                .filter(entity::group::Column::Name.is_in(group_names))
                .all(self.db)
                .await?
                .into_iter()
                .map(|g| (g.name.clone(), g))
                .collect()
        } else {
            HashMap::new()
        };

        let teacher_names: Vec<String> = teachers.iter().map(|t| t.name.clone()).collect();
        let mut courses_map: HashMap<String, Vec<entity::course::Model>> = HashMap::new();
        let assignments = entity::prelude::TeacherCourse::find()
            .filter(entity::teacher_course::Column::TeacherName.is_in(teacher_names))
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await?;
        for (assignment, course) in assignments {
            if let Some(course) = course {
                courses_map
                    .entry(assignment.teacher_name)
                    .or_default()
                    .push(course);
            }
        }

        Ok(teachers
            .into_iter()
            .map(|t| {
                let group = t
                    .group_name
                    .as_ref()
                    .and_then(|name| groups_map.get(name).cloned());
                let courses = courses_map.remove(&t.name).unwrap_or_default();
                Teacher::from_entity(t, group, courses)
            })
            .collect())
    }
}
