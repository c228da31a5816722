use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        student::{StudentDto, UpsertStudentDto},
    },
    server::{
        controller::param::NameParam, error::AppError, model::student::UpsertStudentParams,
        service::student::StudentService, state::AppState,
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Create or replace a student.
///
/// Inserts the student if the name is new, otherwise overwrites its age, group and
/// course set. The group and every course must already exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Student data; group and courses are given by name or as objects
///
/// # Returns
/// - `200 OK` - Student written
/// - `422 Unprocessable Entity` - Unknown group or course, or a course listed twice
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students/",
    tag = STUDENT_TAG,
    request_body = UpsertStudentDto,
    responses(
        (status = 200, description = "Student written"),
        (status = 422, description = "Unknown reference or duplicate course", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_student(
    State(state): State<AppState>,
    Json(payload): Json<UpsertStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpsertStudentParams::from_dto(payload);
    StudentService::new(&state.db).upsert(params).await?;

    Ok(StatusCode::OK)
}

/// Delete a student and its course enrollments.
///
/// # Returns
/// - `200 OK` - Student deleted
/// - `404 Not Found` - No student with this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/",
    tag = STUDENT_TAG,
    params(
        ("name" = String, Query, description = "Name of the student")
    ),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Query(params): Query<NameParam>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = StudentService::new(&state.db).delete(&params.name).await?;

    if deleted {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// List all students with their group and courses.
#[utoipa::path(
    get,
    path = "/students/",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Count students. The body is the number as plain text.
#[utoipa::path(
    get,
    path = "/students/count",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Number of students", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_students(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = StudentService::new(&state.db).count().await?;

    Ok((StatusCode::OK, count.to_string()))
}
