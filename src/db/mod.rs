use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::config::InventoryConfig;
use crate::error::{AppError, AppResult};
use crate::models::*;

/// Open the pool and bring the schema up to date.
pub async fn init(config: &InventoryConfig) -> anyhow::Result<PgPool> {
    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.database.clone())
        .await?;
    info!("Database connection pool established.");

    info!("Running migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    info!("Migrations complete.");

    Ok(pool)
}

// ── Movies ────────────────────────────────────────────────────────────────────

pub async fn fetch_movies(pool: &PgPool, filters: &MovieFilters) -> AppResult<Vec<Movie>> {
    let movies = sqlx::query_as::<_, Movie>(
        r#"
        SELECT id, title, description, created_at, updated_at
        FROM movies
        WHERE ($1::text IS NULL OR title ILIKE $1)
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(filters.title_pattern())
    .bind(filters.limit())
    .bind(filters.offset())
    .fetch_all(pool)
    .await?;

    Ok(movies)
}

pub async fn fetch_movie_by_id(pool: &PgPool, id: Uuid) -> AppResult<Movie> {
    sqlx::query_as::<_, Movie>(
        "SELECT id, title, description, created_at, updated_at FROM movies WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))
}

pub async fn insert_movie(pool: &PgPool, payload: &CreateMovie) -> AppResult<Movie> {
    let movie = sqlx::query_as::<_, Movie>(
        r#"
        INSERT INTO movies (title, description)
        VALUES ($1, $2)
        RETURNING id, title, description, created_at, updated_at
        "#,
    )
    .bind(&payload.title)
    .bind(&payload.description)
    .fetch_one(pool)
    .await?;

    Ok(movie)
}

pub async fn update_movie(pool: &PgPool, id: Uuid, payload: &UpdateMovie) -> AppResult<Movie> {
    let existing = fetch_movie_by_id(pool, id).await?;
    let (title, description) = payload.merged_with(&existing);

    sqlx::query_as::<_, Movie>(
        r#"
        UPDATE movies
        SET title       = $1,
            description = $2,
            updated_at  = $3
        WHERE id = $4
        RETURNING id, title, description, created_at, updated_at
        "#,
    )
    .bind(&title)
    .bind(&description)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Movie {} not found", id)))
}

pub async fn delete_movie(pool: &PgPool, id: Uuid) -> AppResult<()> {
    let result = sqlx::query("DELETE FROM movies WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Movie {} not found", id)));
    }
    Ok(())
}

pub async fn delete_all_movies(pool: &PgPool) -> AppResult<u64> {
    let result = sqlx::query("DELETE FROM movies").execute(pool).await?;
    Ok(result.rows_affected())
}
