//! Inventory service: application factory and the movies route group.

use axum::{routing::get, Router};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::InventoryConfig;
use crate::{db, handlers};

/// Shared application state; cheap to clone since the pool is reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
}

/// Connect the database, run migrations and return the ready router.
///
/// Errors from either step are returned as-is; the caller decides whether
/// the process survives them.
pub async fn create_app(config: &InventoryConfig) -> anyhow::Result<Router> {
    let pool = db::init(config).await?;
    Ok(build_router(AppState { db: pool }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Movies ──────────────────────────────────────────────────────────
        .nest("/api", movies_routes())

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

/// The movies route group, mounted by the factory under `/api`.
pub fn movies_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/movies",
            get(handlers::movies::list_movies)
                .post(handlers::movies::create_movie)
                .delete(handlers::movies::delete_all_movies),
        )
        .route(
            "/movies/:id",
            get(handlers::movies::get_movie)
                .put(handlers::movies::update_movie)
                .delete(handlers::movies::delete_movie),
        )
}
