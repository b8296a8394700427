use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;
mod pdf;
mod state;

use config::Config;
use middleware::auth::TokenService;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::auth::handlers::register,
        features::auth::handlers::login,
        features::groups::handlers::create_group,
        features::groups::handlers::list_groups,
        features::groups::handlers::delete_group,
        features::groups::handlers::add_child,
        features::groups::handlers::list_children,
        features::children::handlers::delete_child,
        features::competitions::handlers::create_competition,
        features::competitions::handlers::list_competitions,
        features::competitions::handlers::delete_competition,
        features::competitions::handlers::upsert_results,
        features::competitions::handlers::list_results,
        features::competitions::handlers::competition_pdf,
    ),
    components(
        schemas(
            storage::dto::coach::RegisterCoachRequest,
            storage::dto::coach::CoachResponse,
            storage::dto::auth::LoginForm,
            storage::dto::auth::TokenResponse,
            storage::dto::group::CreateGroupRequest,
            storage::dto::group::GroupResponse,
            storage::dto::child::CreateChildRequest,
            storage::dto::child::ChildResponse,
            storage::dto::competition::CreateCompetitionRequest,
            storage::dto::competition::CompetitionResponse,
            storage::dto::result::ResultEntry,
            storage::dto::result::ResultResponse,
            storage::models::Group,
            storage::models::Child,
            storage::models::Competition,
            storage::models::CompetitionResult,
        )
    ),
    tags(
        (name = "auth", description = "Coach registration and token endpoints"),
        (name = "groups", description = "Group and roster endpoints"),
        (name = "children", description = "Child endpoints"),
        (name = "competitions", description = "Competition, results and export endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Gymnastics Competition Results API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        tokens: TokenService::new(&config.token_secret, config.token_ttl_minutes),
    };

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::auth::routes::routes())
        .nest("/groups", features::groups::routes::routes(state.clone()))
        .nest(
            "/children",
            features::children::routes::routes(state.clone()),
        )
        .nest(
            "/competitions",
            features::competitions::routes::routes(state.clone()),
        )
        .layer(CorsLayer::permissive())
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind server address")?;

    axum::serve(listener, app).await?;

    Ok(())
}
