//! Student data repository for database operations.
//!
//! Besides plain CRUD this repository hosts the report lookups, which filter students
//! through the `studentcourses` association table. Every query hydrates the resulting
//! rows with their group and courses before handing out `Student` domain models.

use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};
use std::collections::HashMap;

use crate::server::model::student::{Student, UpsertStudentParams};

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a student or replaces the existing one with the same name.
    ///
    /// The age and group are overwritten and the course set is replaced wholesale: all
    /// existing association rows are removed before the new ones are inserted. Run this
    /// inside a transaction so a failing association insert leaves nothing behind.
    ///
    /// # Returns
    /// - `Ok(())` - Student and associations written
    /// - `Err(DbErr)` - Database error, including a unique violation when `params.courses`
    ///   repeats a course and a foreign key violation when a reference is unknown
    pub async fn upsert(&self, params: UpsertStudentParams) -> Result<(), DbErr> {
        entity::prelude::Student::insert(entity::student::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            age: ActiveValue::Set(params.age),
            group_name: ActiveValue::Set(params.group),
        })
        .on_conflict(
            OnConflict::column(entity::student::Column::Name)
                .update_columns([
                    entity::student::Column::Age,
                    entity::student::Column::GroupName,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        entity::prelude::StudentCourse::delete_many()
            .filter(entity::student_course::Column::StudentName.eq(params.name.as_str()))
            .exec(self.db)
            .await?;

        for course in params.courses {
            entity::prelude::StudentCourse::insert(entity::student_course::ActiveModel {
                student_name: ActiveValue::Set(params.name.clone()),
                course_name: ActiveValue::Set(course),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn exists(&self, name: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find_by_id(name.to_string())
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a student by name; its course associations cascade.
    pub async fn delete(&self, name: &str) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(name.to_string())
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }

    pub async fn get_all(&self) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find().all(self.db).await?;

        self.with_relations(students).await
    }

    /// Gets students enrolled in the course with exactly this name.
    pub async fn find_by_course(&self, course: &str) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .inner_join(entity::prelude::StudentCourse)
            .filter(entity::student_course::Column::CourseName.eq(course))
            .all(self.db)
            .await?;

        self.with_relations(students).await
    }

    /// Gets students belonging to the group with exactly this name.
    pub async fn find_by_group(&self, group: &str) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .filter(entity::student::Column::GroupName.eq(group))
            .all(self.db)
            .await?;

        self.with_relations(students).await
    }

    /// Gets students enrolled in `course` that also belong to `group`.
    pub async fn find_by_course_and_group(
        &self,
        course: &str,
        group: &str,
    ) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .inner_join(entity::prelude::StudentCourse)
            .filter(entity::student_course::Column::CourseName.eq(course))
            .filter(entity::student::Column::GroupName.eq(group))
            .all(self.db)
            .await?;

        self.with_relations(students).await
    }

    /// Gets students enrolled in `course` whose age is strictly greater than `age`.
    pub async fn find_by_course_older_than(
        &self,
        course: &str,
        age: i32,
    ) -> Result<Vec<Student>, DbErr> {
        let students = entity::prelude::Student::find()
            .inner_join(entity::prelude::StudentCourse)
            .filter(entity::student_course::Column::CourseName.eq(course))
            .filter(entity::student::Column::Age.gt(age))
            .all(self.db)
            .await?;

        self.with_relations(students).await
    }

    /// Loads the group and courses of each student with one query per relation.
    async fn with_relations(
        &self,
        students: Vec<entity::student::Model>,
    ) -> Result<Vec<Student>, DbErr> {
        if students.is_empty() {
            return Ok(Vec::new());
        }

        let group_names: Vec<String> = students
            .iter()
            .filter_map(|s| s.group_name.clone())
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

        let student_names: Vec<String> = students.iter().map(|s| s.name.clone()).collect();
        let mut courses_map: HashMap<String, Vec<entity::course::Model>> = HashMap::new();
        let enrollments = entity::prelude::StudentCourse::find()
            .filter(entity::student_course::Column::StudentName.is_in(student_names))
            .find_also_related(entity::prelude::Course)
            .all(self.db)
            .await?;
        for (enrollment, course) in enrollments {
            if let Some(course) = course {
                courses_map
                    .entry(enrollment.student_name)
                    .or_default()
                    .push(course);
            }
        }

        Ok(students
            .into_iter()
            .map(|s| {
                let group = s
                    .group_name
                    .as_ref()
                    .and_then(|name| groups_map.get(name).cloned());
                let courses = courses_map.remove(&s.name).unwrap_or_default();
                Student::from_entity(s, group, courses)
            })
            .collect())
    }
}
