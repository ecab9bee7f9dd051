use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{PgCompanyStore, PgDriverStore};
use application::{CompanyService, DriverService};

/// Type aliases for application services with concrete store implementations
pub type AppCompanyService = CompanyService<PgCompanyStore>;
pub type AppDriverService = DriverService<PgDriverStore>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<AppCompanyService>,
    pub driver_service: Arc<AppDriverService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    tracing::info!("Fleet API initializing...");

    let database_url = std::env::var("DATABASE_URL")?;
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&database_url)
        .await?;

    sqlx::migrate!().run(&pool).await?;

    tracing::info!("Database migrations completed");

    let company_store = Arc::new(PgCompanyStore::new(pool.clone()));
    let driver_store = Arc::new(PgDriverStore::new(pool));
    let state = AppState {
        company_service: Arc::new(CompanyService::new(company_store)),
        driver_service: Arc::new(DriverService::new(driver_store)),
    };

    let openapi = routes::swagger::ApiDoc::openapi();

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::company::router())
        .merge(routes::driver::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "Fleet API ready - Swagger UI at /swagger-ui");

    axum::serve(listener, router).await?;

    Ok(())
}
