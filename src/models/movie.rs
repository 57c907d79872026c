use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movie {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateMovie {
    pub title: String,
    pub description: Option<String>,
}

impl CreateMovie {
    /// Trim the title and reject it if nothing is left.
    pub fn validated(mut self) -> AppResult<Self> {
        self.title = normalize_title(&self.title)?;
        Ok(self)
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl UpdateMovie {
    pub fn validated(mut self) -> AppResult<Self> {
        if let Some(title) = self.title.as_deref() {
            self.title = Some(normalize_title(title)?);
        }
        Ok(self)
    }

    /// Resolve the stored `(title, description)` after this update. Absent or
    /// `null` fields keep the existing value, so a PUT cannot clear the
    /// description.
    pub fn merged_with(&self, existing: &Movie) -> (String, Option<String>) {
        let title = self.title.clone().unwrap_or_else(|| existing.title.clone());
        let description = self.description.clone().or_else(|| existing.description.clone());
        (title, description)
    }
}

fn normalize_title(raw: &str) -> AppResult<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(AppError::BadRequest("title must not be empty".to_string()));
    }
    Ok(title.to_string())
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct MovieFilters {
    /// Case-insensitive substring match on the title
    pub title: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl MovieFilters {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(1000).clamp(1, 10_000)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    /// LIKE pattern for the title filter, with wildcards in the input escaped.
    pub fn title_pattern(&self) -> Option<String> {
        let title = self.title.as_deref()?.trim();
        if title.is_empty() {
            return None;
        }
        let escaped = title
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        Some(format!("%{escaped}%"))
    }
}
