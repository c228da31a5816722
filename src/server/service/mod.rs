//! Business logic layer between controllers and repositories.
//!
//! Each write or delete runs as a single database transaction opened here. Services also
//! translate integrity failures into `ConstraintError`s (see `error::constraint`) and let
//! every other failure propagate unchanged.

pub mod course;
pub mod group;
pub mod report;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
