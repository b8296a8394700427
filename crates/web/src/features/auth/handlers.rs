use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::auth::{LoginForm, TokenResponse};
use storage::dto::coach::{CoachResponse, RegisterCoachRequest};
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterCoachRequest,
    responses(
        (status = 201, description = "Coach registered successfully", body = CoachResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username already exists")
    ),
    tag = "auth"
)]
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterCoachRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let coach = services::register(state.db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(CoachResponse::from(coach))).into_response())
}

#[utoipa::path(
    post,
    path = "/token",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Token issued", body = TokenResponse),
        (status = 401, description = "Incorrect username or password")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Json<TokenResponse>, WebError> {
    let token =
        services::login(state.db.pool(), &state.tokens, &form.username, &form.password).await?;

    Ok(Json(TokenResponse::bearer(token)))
}
