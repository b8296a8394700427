use storage::Database;

use crate::middleware::auth::TokenService;

/// Shared state handed to every handler and to the auth middleware.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenService,
}
