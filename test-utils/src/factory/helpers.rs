//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a group, a course and a student enrolled in that course and member of that group.
///
/// All entities are created with default values. Use the individual factories if you need
/// to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((group, course, student))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::group::Model,
        entity::course::Model,
        entity::student::Model,
    ),
    DbErr,
> {
    let group = crate::factory::group::create_group(db).await?;
    let course = crate::factory::course::create_course(db).await?;
    let student = crate::factory::student::StudentFactory::new(db)
        .group(&group.name)
        .course(&course.name)
        .build()
        .await?;

    Ok((group, course, student))
}
