//! Report endpoints.
//!
//! All lookups are exact, case-sensitive matches. Unknown course or group names
//! produce empty results instead of errors.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, report::ParticipationDto, student::StudentDto},
    server::{
        controller::param::{AgeParam, CourseParam, GroupParam, ParticipationParam},
        error::AppError,
        model::student::Student,
        service::report::ReportService,
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

fn into_dtos(students: Vec<Student>) -> Vec<StudentDto> {
    students.into_iter().map(Student::into_dto).collect()
}

/// Students enrolled in a course.
#[utoipa::path(
    get,
    path = "/reports/studentsincourse",
    tag = REPORT_TAG,
    params(
        ("course" = String, Query, description = "Course name")
    ),
    responses(
        (status = 200, description = "Students enrolled in the course", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn students_in_course(
    State(state): State<AppState>,
    Query(params): Query<CourseParam>,
) -> Result<impl IntoResponse, AppError> {
    let students = ReportService::new(&state.db)
        .students_in_course(&params.course)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Students belonging to a group.
#[utoipa::path(
    get,
    path = "/reports/studentsingroup",
    tag = REPORT_TAG,
    params(
        ("group" = String, Query, description = "Group name")
    ),
    responses(
        (status = 200, description = "Students in the group", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn students_in_group(
    State(state): State<AppState>,
    Query(params): Query<GroupParam>,
) -> Result<impl IntoResponse, AppError> {
    let students = ReportService::new(&state.db)
        .students_in_group(&params.group)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}

/// Students and teachers who are both in the course and in the group.
#[utoipa::path(
    get,
    path = "/reports/participation",
    tag = REPORT_TAG,
    params(
        ("group" = String, Query, description = "Group name"),
        ("course" = String, Query, description = "Course name")
    ),
    responses(
        (status = 200, description = "Matching students and teachers", body = ParticipationDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn participation(
    State(state): State<AppState>,
    Query(params): Query<ParticipationParam>,
) -> Result<impl IntoResponse, AppError> {
    let participation = ReportService::new(&state.db)
        .participation(&params.group, &params.course)
        .await?;

    Ok((StatusCode::OK, Json(participation.into_dto())))
}

/// Students of a course strictly older than the given age.
#[utoipa::path(
    get,
    path = "/reports/age",
    tag = REPORT_TAG,
    params(
        ("age" = i32, Query, description = "Exclusive lower age bound"),
        ("course" = String, Query, description = "Course name")
    ),
    responses(
        (status = 200, description = "Matching students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn students_older_than(
    State(state): State<AppState>,
    Query(params): Query<AgeParam>,
) -> Result<impl IntoResponse, AppError> {
    let students = ReportService::new(&state.db)
        .students_older_than_in_course(params.age, &params.course)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(students))))
}
