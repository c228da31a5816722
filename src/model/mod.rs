//! Wire-level DTOs shared by the HTTP handlers.
//!
//! These types define the JSON shapes accepted and produced by the API. Server-side
//! domain models convert to and from them at the controller boundary.

pub mod api;
pub mod course;
pub mod group;
pub mod report;
pub mod student;
pub mod teacher;
