//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Person factories insert their course association rows,
//! so the referenced groups and courses must be created first.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let group = factory::create_group(&db).await?;
//!     let course = factory::create_course(&db).await?;
//!
//!     let student = factory::student::StudentFactory::new(&db)
//!         .name("Alice")
//!         .age(20)
//!         .group(&group.name)
//!         .course(&course.name)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `group` - Create group entities
//! - `course` - Create course entities
//! - `student` - Create student entities with their course associations
//! - `teacher` - Create teacher entities with their course associations
//! - `helpers` - Unique id generation and dependency helpers

pub mod course;
pub mod group;
pub mod helpers;
pub mod student;
pub mod teacher;

pub use course::create_course;
pub use group::create_group;
pub use student::create_student;
pub use teacher::create_teacher;
