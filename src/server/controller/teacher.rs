use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        teacher::{TeacherDto, UpsertTeacherDto},
    },
    server::{
        controller::param::NameParam, error::AppError, model::teacher::UpsertTeacherParams,
        service::teacher::TeacherService, state::AppState,
    },
};

/// Tag for grouping teacher endpoints in OpenAPI documentation
pub static TEACHER_TAG: &str = "teacher";

/// Create or replace a teacher.
///
/// Inserts the teacher if the name is new, otherwise overwrites its age, group and
/// course set. The group and every course must already exist.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Teacher data; group and courses are given by name or as objects
///
/// # Returns
/// - `200 OK` - Teacher written
/// - `422 Unprocessable Entity` - Unknown group or course, or a course listed twice
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/teachers",
    tag = TEACHER_TAG,
    request_body = UpsertTeacherDto,
    responses(
        (status = 200, description = "Teacher written"),
        (status = 422, description = "Unknown reference or duplicate course", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_teacher(
    State(state): State<AppState>,
    Json(payload): Json<UpsertTeacherDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = UpsertTeacherParams::from_dto(payload);
    TeacherService::new(&state.db).upsert(params).await?;

    Ok(StatusCode::OK)
}

/// Delete a teacher and its course enrollments.
///
/// # Returns
/// - `200 OK` - Teacher deleted
/// - `404 Not Found` - No teacher with this name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/teachers",
    tag = TEACHER_TAG,
    params(
        ("name" = String, Query, description = "Name of the teacher")
    ),
    responses(
        (status = 200, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Query(params): Query<NameParam>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = TeacherService::new(&state.db).delete(&params.name).await?;

    if deleted {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// List all teachers with their group and courses.
#[utoipa::path(
    get,
    path = "/teachers",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "All teachers", body = Vec<TeacherDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let teachers = TeacherService::new(&state.db).get_all().await?;

    let dtos: Vec<TeacherDto> = teachers.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Count teachers. The body is the number as plain text.
#[utoipa::path(
    get,
    path = "/teachers/count",
    tag = TEACHER_TAG,
    responses(
        (status = 200, description = "Number of teachers", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_teachers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let count = TeacherService::new(&state.db).count().await?;

    Ok((StatusCode::OK, count.to_string()))
}
