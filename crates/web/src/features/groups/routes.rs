use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use super::handlers::{add_child, create_group, delete_group, list_children, list_groups};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_group))
        .route("/", get(list_groups))
        .route("/:id", delete(delete_group))
        .route("/:id/children", post(add_child))
        .route("/:id/children", get(list_children))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
