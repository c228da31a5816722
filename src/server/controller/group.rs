use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, group::GroupDto},
    server::{
        controller::param::NameParam, error::AppError, model::group::UpsertGroupParams,
        service::group::GroupService, state::AppState,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// Create or replace a group.
#[utoipa::path(
    post,
    path = "/groups",
    tag = GROUP_TAG,
    request_body = GroupDto,
    responses(
        (status = 200, description = "Group written"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upsert_group(
    State(state): State<AppState>,
    Json(payload): Json<GroupDto>,
) -> Result<impl IntoResponse, AppError> {
    GroupService::new(&state.db)
        .upsert(UpsertGroupParams::from_dto(payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a group.
///
/// A group cannot be deleted while any student or teacher belongs to it.
///
/// # Returns
/// - `200 OK` - Group deleted
/// - `404 Not Found` - No group with this name
/// - `422 Unprocessable Entity` - Group still referenced
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/groups",
    tag = GROUP_TAG,
    params(
        ("name" = String, Query, description = "Name of the group")
    ),
    responses(
        (status = 200, description = "Group deleted"),
        (status = 404, description = "Group not found"),
        (status = 422, description = "Group still referenced", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Query(params): Query<NameParam>,
) -> Result<impl IntoResponse, AppError> {
    let deleted = GroupService::new(&state.db).delete(&params.name).await?;

    if deleted {
        Ok(StatusCode::OK)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

#[utoipa::path(
    get,
    path = "/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupService::new(&state.db).get_all().await?;

    let dtos: Vec<GroupDto> = groups.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
