use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{
    competition_pdf, create_competition, delete_competition, list_competitions, list_results,
    upsert_results,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_competition))
        .route("/", get(list_competitions))
        .route("/:id", delete(delete_competition))
        .route("/:id/results", post(upsert_results))
        .route("/:id/results", get(list_results))
        .route("/:id/pdf", get(competition_pdf))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
