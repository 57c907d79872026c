use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use uuid::Uuid;

use crate::{
    db,
    error::AppResult,
    extract::{AppJson, AppPath, AppQuery},
    inventory::AppState,
    models::{CreateMovie, MovieFilters, UpdateMovie},
};

// ── List ──────────────────────────────────────────────────────────────────────

pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(filters): AppQuery<MovieFilters>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let start = Instant::now();
    let movies = db::fetch_movies(&state.db, &filters).await?;
    let elapsed = start.elapsed();

    info!(
        count = movies.len(),
        title = filters.title.as_deref().unwrap_or(""),
        elapsed_ms = elapsed.as_millis(),
        "Listed movies"
    );

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "data": movies,
            "count": movies.len(),
        })),
    ))
}

// ── Create ────────────────────────────────────────────────────────────────────

pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMovie>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let payload = payload.validated()?;
    let movie = db::insert_movie(&state.db, &payload).await?;

    info!(id = %movie.id, title = %movie.title, "Created movie");

    Ok((StatusCode::CREATED, Json(serde_json::json!({ "data": movie }))))
}

// ── Delete all ────────────────────────────────────────────────────────────────

pub async fn delete_all_movies(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let deleted = db::delete_all_movies(&state.db).await?;

    info!(deleted, "Deleted all movies");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "All movies deleted",
            "deleted": deleted,
        })),
    ))
}

// ── Get by ID ─────────────────────────────────────────────────────────────────

pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let movie = db::fetch_movie_by_id(&state.db, id).await?;

    info!(id = %id, "Fetched movie");

    Ok((StatusCode::OK, Json(serde_json::json!({ "data": movie }))))
}

// ── Update ────────────────────────────────────────────────────────────────────

pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateMovie>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    let payload = payload.validated()?;
    let movie = db::update_movie(&state.db, id, &payload).await?;

    info!(id = %id, "Updated movie");

    Ok((StatusCode::OK, Json(serde_json::json!({ "data": movie }))))
}

// ── Delete ────────────────────────────────────────────────────────────────────

pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    db::delete_movie(&state.db, id).await?;

    info!(id = %id, "Deleted movie");

    Ok((
        StatusCode::OK,
        Json(serde_json::json!({
            "message": "Movie deleted",
            "id": id,
        })),
    ))
}
