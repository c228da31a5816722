//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! entity. Repositories use SeaORM entity models internally and return domain models to
//! maintain separation between the data layer and business logic layer. Every
//! repository is generic over `ConnectionTrait` so services can run several of them
//! inside one `DatabaseTransaction`.

pub mod course;
pub mod group;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
