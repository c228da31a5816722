//! Classification of store failures into client-facing constraint errors.
//!
//! Write and delete operations surface integrity failures as `DbErr`. The helpers in
//! this module inspect the driver's structured error kind (`DbErr::sql_err()`) and map
//! the known cases onto `ConstraintError`. Everything else is handed back unchanged as
//! `AppError::DbErr` so it reaches the generic 500 handler.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::server::error::AppError;

/// Kind of entity that other rows point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    Group,
    Course,
}

impl ReferenceKind {
    /// Capitalized label used at the start of a sentence.
    pub fn label(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Course => "Course",
        }
    }

    /// Lowercase noun used inside a sentence.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Group => "group",
            Self::Course => "course",
        }
    }
}

/// Integrity failures reported to the client as 422 Unprocessable Entity.
///
/// The display text of each variant is the exact response body.
#[derive(Error, Debug, PartialEq)]
pub enum ConstraintError {
    /// A person references a group or course that does not exist.
    #[error("{} with name [{}] does not exist.", .kind.label(), .name)]
    InvalidReference { kind: ReferenceKind, name: String },

    /// A person's course set contains the same course more than once.
    #[error("You have at least one duplicate course")]
    DuplicateAssociation,

    /// A group or course cannot be deleted while people still reference it.
    #[error(
        "The {} [{}] is still referenced by some students or teachers. Remove all references before deleting the {}.",
        .kind.noun(),
        .name,
        .kind.noun()
    )]
    StillReferenced { kind: ReferenceKind, name: String },
}

/// Classifies a failure raised while writing a person's course associations.
///
/// A unique violation on the association key means the payload repeated a course.
pub fn classify_association_write(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ConstraintError::DuplicateAssociation.into(),
        _ => AppError::DbErr(err),
    }
}

/// Classifies a failure raised while deleting a group or course.
///
/// A foreign key violation means a student or teacher still points at the row.
pub fn classify_reference_delete(err: DbErr, kind: ReferenceKind, name: &str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => ConstraintError::StillReferenced {
            kind,
            name: name.to_string(),
        }
        .into(),
        _ => AppError::DbErr(err),
    }
}
