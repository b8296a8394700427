use axum::{Router, middleware, routing::delete};

use super::handlers::delete_child;
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/:id", delete(delete_child))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
