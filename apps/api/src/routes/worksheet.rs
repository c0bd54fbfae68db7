//! Axum route handlers for worksheet generation.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::layout::{plan_worksheet, LayoutParams, A4};
use crate::render::render_pdf;
use crate::state::AppState;
use crate::vocab::Level;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct WorksheetQuery {
    pub level: u8,
    pub items_per_page: Option<u32>,
    pub columns_per_row: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct LevelInfo {
    pub level: u8,
    pub label: String,
    pub entry_count: usize,
}

#[derive(Debug, Serialize)]
pub struct LevelsResponse {
    pub levels: Vec<LevelInfo>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/levels
///
/// Lists the supported study levels with their resolved entry counts.
/// Resolution goes through the source adapter, so counts come from the
/// memoized (possibly fallback) wordlists.
pub async fn handle_list_levels(State(state): State<AppState>) -> Json<LevelsResponse> {
    let mut levels = Vec::with_capacity(Level::ALL.len());
    for level in Level::ALL {
        let entries = state.vocab.entries(level).await;
        levels.push(LevelInfo {
            level: level.number(),
            label: level.label(),
            entry_count: entries.len(),
        });
    }
    Json(LevelsResponse { levels })
}

/// GET /api/v1/worksheet?level=2&items_per_page=12&columns_per_row=3
///
/// Generates the practice worksheet for a level and returns it as a
/// downloadable PDF. Parameters are validated before any layout work; the
/// vocabulary resolution never fails (embedded fallback).
pub async fn handle_worksheet(
    State(state): State<AppState>,
    Query(query): Query<WorksheetQuery>,
) -> Result<(HeaderMap, Bytes), AppError> {
    let level = Level::from_number(query.level).ok_or_else(|| {
        AppError::Validation(format!(
            "unsupported level '{}': expected one of 2, 3",
            query.level
        ))
    })?;

    let params = LayoutParams::new(
        query
            .items_per_page
            .unwrap_or(LayoutParams::DEFAULT_ITEMS_PER_PAGE),
        query
            .columns_per_row
            .unwrap_or(LayoutParams::DEFAULT_COLUMNS_PER_ROW),
    )?;

    let entries = state.vocab.entries(level).await;
    let font = state.font.clone();

    // Layout + render are CPU-bound; keep them off the async runtime.
    let pdf = tokio::task::spawn_blocking(move || {
        let title = format!("{} Writing Practice", level.label());
        let plan = plan_worksheet(&title, &level.label(), &entries, params, A4);
        render_pdf(&plan, &font)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("render task failed: {e}")))??;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            level.filename()
        ))
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?,
    );

    Ok((headers, Bytes::from(pdf)))
}
