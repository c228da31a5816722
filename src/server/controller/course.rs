use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form, Json,
};

use crate::{
    model::{api::ErrorDto, course::CourseDto},
    server::{
        controller::param::NameParam,
        error::AppError,
        model::course::{CourseType, UpsertCourseParams},
        service::course::CourseService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// Course payload read from a JSON body, a form body or the query string.
///
/// The body is used when its content type is JSON or form-urlencoded; any other request
/// binds `name`, `description` and `type` from query parameters
/// (`POST /courses?name=C1&type=MAIN`).
pub struct CoursePayload(pub CourseDto);

impl<S: Send + Sync> FromRequest<S> for CoursePayload {
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(dto) = Json::<CourseDto>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(dto))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(dto) = Form::<CourseDto>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(dto))
        } else {
            let (mut parts, _) = req.into_parts();
            let Query(dto) = Query::<CourseDto>::from_request_parts(&mut parts, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Self(dto))
        }
    }
}

/// Create or replace a course.
///
/// Accepts the course as JSON, as a form body or as query parameters.
///
/// # Returns
/// - `200 OK` - Course written
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/courses",
    tag = COURSE_TAG,
    request_body = CourseDto,
    responses(
        (status = 200, description = "Course written"),
        (status = 400, description = "Missing or invalid course fields"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_course(
    State(state): State<AppState>,
    CoursePayload(payload): CoursePayload,
) -> Result<impl IntoResponse, AppError> {
    CourseService::new(&state.db)
        .upsert(UpsertCourseParams::from_dto(payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a course.
///
/// A course cannot be deleted while any student or teacher is enrolled in it.
///
/// # Returns
/// - `200 OK` - Course deleted
/// - `404 Not Found` - No course with this name
/// - `422 Unprocessable Entity` - Course still referenced
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/courses",
    tag = COURSE_TAG,
    params(
        ("name" = String, Query, description = "Name of the course")
    ),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 404, description = "Course not found"),
        (status = 422, description = "Course still referenced", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Query(params): Query<NameParam>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = CourseService::new(&state.db).delete(&params.name).await?;

    if deleted {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

#[utoipa::path(
    get,
    path = "/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let courses = CourseService::new(&state.db).get_all().await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Count MAIN courses as plain text.
#[utoipa::path(
    get,
    path = "/courses/main/count",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Number of main courses", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_main_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let count = CourseService::new(&state.db)
        .count_by_type(CourseType::Main)
        .await?;

    Ok((StatusCode::OK, count.to_string()))
}

/// Count SECONDARY courses as plain text.
#[utoipa::path(
    get,
    path = "/courses/secondary/count",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Number of secondary courses", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn count_secondary_courses(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let count = CourseService::new(&state.db)
        .count_by_type(CourseType::Secondary)
        .await?;

    Ok((StatusCode::OK, count.to_string()))
}
