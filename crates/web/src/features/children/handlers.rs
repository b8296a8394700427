use axum::{
    Extension,
    extract::{Path, State},
    http::StatusCode,
};
use storage::models::Coach;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    delete,
    path = "/children/{id}",
    params(("id" = i32, Path, description = "Child id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Child deleted; their results cascade"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Child not found")
    ),
    tag = "children"
)]
pub async fn delete_child(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
) -> Result<StatusCode, WebError> {
    services::delete_child(state.db.pool(), id, coach.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
