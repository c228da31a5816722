//! Domain models and operation parameters.
//!
//! Domain models are built from SeaORM entity models at the repository boundary and
//! converted into DTOs at the controller boundary. Parameter types carry the already
//! normalized input of write operations.

pub mod course;
pub mod group;
pub mod report;
pub mod student;
pub mod teacher;
