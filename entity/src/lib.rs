//! SeaORM entities for the school registry schema.

pub mod prelude;

pub mod course;
pub mod group;
pub mod sea_orm_active_enums;
pub mod student;
pub mod student_course;
pub mod teacher;
pub mod teacher_course;
