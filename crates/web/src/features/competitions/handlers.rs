use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use storage::dto::competition::{CompetitionResponse, CreateCompetitionRequest};
use storage::dto::result::{ResultEntry, ResultResponse};
use storage::models::Coach;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/competitions",
    request_body = CreateCompetitionRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Competition created successfully", body = CompetitionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group not found")
    ),
    tag = "competitions"
)]
pub async fn create_competition(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Json(req): Json<CreateCompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let competition = services::create_competition(state.db.pool(), coach.id, &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(CompetitionResponse::from(competition)),
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/competitions",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The coach's competitions, most recent first", body = Vec<CompetitionResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "competitions"
)]
pub async fn list_competitions(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
) -> Result<Json<Vec<CompetitionResponse>>, WebError> {
    let competitions = services::list_competitions(state.db.pool(), coach.id).await?;

    Ok(Json(
        competitions
            .into_iter()
            .map(CompetitionResponse::from)
            .collect(),
    ))
}

#[utoipa::path(
    delete,
    path = "/competitions/{id}",
    params(("id" = i32, Path, description = "Competition id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Competition deleted; its results cascade"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn delete_competition(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
) -> Result<StatusCode, WebError> {
    services::delete_competition(state.db.pool(), id, coach.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/competitions/{id}/results",
    params(("id" = i32, Path, description = "Competition id")),
    request_body = Vec<ResultEntry>,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Batch persisted; rows returned in input order", body = Vec<ResultResponse>),
        (status = 400, description = "Out-of-range score, or an entry references a child outside the competition's group (whole batch rejected)"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn upsert_results(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
    Json(entries): Json<Vec<ResultEntry>>,
) -> Result<Response, WebError> {
    for entry in &entries {
        entry.validate()?;
    }

    let results = services::upsert_results(state.db.pool(), id, coach.id, &entries).await?;

    let response: Vec<ResultResponse> = results.into_iter().map(ResultResponse::from).collect();

    Ok((StatusCode::CREATED, Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/competitions/{id}/results",
    params(("id" = i32, Path, description = "Competition id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The competition's results in creation order", body = Vec<ResultResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn list_results(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<ResultResponse>>, WebError> {
    let results = services::list_results(state.db.pool(), id, coach.id).await?;

    Ok(Json(results.into_iter().map(ResultResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/competitions/{id}/pdf",
    params(("id" = i32, Path, description = "Competition id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Printable results sheet", content_type = "application/pdf"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competitions"
)]
pub async fn competition_pdf(
    State(state): State<AppState>,
    Extension(coach): Extension<Coach>,
    Path(id): Path<i32>,
) -> Result<Response, WebError> {
    let bytes = services::render_competition_pdf(state.db.pool(), id, &coach).await?;

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"competition_{id}_results.pdf\""),
        ),
    ];

    Ok((headers, bytes).into_response())
}
