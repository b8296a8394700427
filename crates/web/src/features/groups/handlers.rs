use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::child::{ChildResponse, CreateChildRequest};
use storage::dto::group::{CreateGroupRequest, GroupResponse};
use storage::models::Coach;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Group created successfully", body = GroupResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Group name already exists for this coach")
    ),
    tag = "groups"
)]
pub async fn create_group(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let group = services::create_group(state.db.pool(), coach.id, &req).await?;

    Ok((StatusCode::CREATED, Json(GroupResponse::from(group))).into_response())
}

#[utoipa::path(
    get,
    path = "/groups",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The coach's groups, ordered by name", body = Vec<GroupResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "groups"
)]
pub async fn list_groups(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
) -> Result<Json<Vec<GroupResponse>>, WebError> {
    let groups = services::list_groups(state.db.pool(), coach.id).await?;

    Ok(Json(groups.into_iter().map(GroupResponse::from).collect()))
}

#[utoipa::path(
    delete,
    path = "/groups/{id}",
    params(("id" = i32, Path, description = "Group id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Group deleted; its children and their results cascade"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group not found")
    ),
    tag = "groups"
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
) -> Result<StatusCode, WebError> {
    services::delete_group(state.db.pool(), id, coach.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/groups/{id}/children",
    params(("id" = i32, Path, description = "Group id")),
    request_body = CreateChildRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Child added to the group", body = ChildResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group not found")
    ),
    tag = "groups"
)]
pub async fn add_child(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
    Json(req): Json<CreateChildRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let child = services::add_child(state.db.pool(), id, coach.id, &req).await?;

    Ok((StatusCode::CREATED, Json(ChildResponse::from(child))).into_response())
}

#[utoipa::path(
    get,
    path = "/groups/{id}/children",
    params(("id" = i32, Path, description = "Group id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The group's children, ordered by surname then name", body = Vec<ChildResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group not found")
    ),
    tag = "groups"
)]
pub async fn list_children(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ChildResponse>>, WebError> {
    let children = services::list_children(state.db.pool(), id, coach.id).await?;

    Ok(Json(children.into_iter().map(ChildResponse::from).collect()))
}
