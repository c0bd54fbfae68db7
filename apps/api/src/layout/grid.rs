//! Worksheet grid layout — partitions a vocabulary list into pages of
//! uniform, directly-placed cells.
//!
//! This is a pure function from (entries, parameters) to a [`WorksheetPlan`];
//! no I/O and no PDF types. The renderer walks the plan afterwards.

use serde::Serialize;
use thiserror::Error;

use crate::layout::page::{PageMetrics, Rect};
use crate::vocab::VocabularyEntry;

/// Display limit for the gloss line, in characters.
pub const GLOSS_DISPLAY_CHARS: usize = 18;

/// Fixed descriptive string combined with the level label on the cover.
pub const COVER_SUBTITLE: &str = "Chinese Character Writing Practice";

// ────────────────────────────────────────────────────────────────────────────
// Layout parameters
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("items_per_page must be between {min} and {max}, got {got}")]
    ItemsPerPageOutOfRange { got: u32, min: u32, max: u32 },

    #[error("columns_per_row must be between {min} and {max}, got {got}")]
    ColumnsOutOfRange { got: u32, min: u32, max: u32 },

    #[error("columns_per_row ({columns}) must not exceed items_per_page ({items})")]
    ColumnsExceedItems { columns: u32, items: u32 },
}

/// Validated layout parameters. Construction is the only way to obtain a
/// value, so downstream arithmetic can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutParams {
    items_per_page: u32,
    columns_per_row: u32,
}

impl LayoutParams {
    pub const ITEMS_PER_PAGE_BOUNDS: (u32, u32) = (4, 20);
    pub const COLUMNS_PER_ROW_BOUNDS: (u32, u32) = (2, 5);
    pub const DEFAULT_ITEMS_PER_PAGE: u32 = 12;
    pub const DEFAULT_COLUMNS_PER_ROW: u32 = 3;

    pub fn new(items_per_page: u32, columns_per_row: u32) -> Result<Self, LayoutError> {
        let (items_min, items_max) = Self::ITEMS_PER_PAGE_BOUNDS;
        if !(items_min..=items_max).contains(&items_per_page) {
            return Err(LayoutError::ItemsPerPageOutOfRange {
                got: items_per_page,
                min: items_min,
                max: items_max,
            });
        }

        if columns_per_row > items_per_page {
            return Err(LayoutError::ColumnsExceedItems {
                columns: columns_per_row,
                items: items_per_page,
            });
        }

        let (cols_min, cols_max) = Self::COLUMNS_PER_ROW_BOUNDS;
        if !(cols_min..=cols_max).contains(&columns_per_row) {
            return Err(LayoutError::ColumnsOutOfRange {
                got: columns_per_row,
                min: cols_min,
                max: cols_max,
            });
        }

        Ok(Self {
            items_per_page,
            columns_per_row,
        })
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn columns_per_row(&self) -> u32 {
        self.columns_per_row
    }

    pub fn rows_per_page(&self) -> u32 {
        self.items_per_page.div_ceil(self.columns_per_row)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Plan types
// ────────────────────────────────────────────────────────────────────────────

/// One cell of a content page. Geometry is always present; blank cells carry
/// no entry but still render their guide sub-grid.
#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub rect: Rect,
    /// Upper band: glyph and label lines.
    pub label_band: Rect,
    /// Lower band: the handwriting guide sub-grid.
    pub guide_band: Rect,
    pub entry: Option<VocabularyEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverPage {
    pub title: String,
    pub subtitle: String,
}

/// A content page: the 1-based inclusive index range it represents and its
/// row-major cell grid (always `rows_per_page × columns_per_row` cells).
#[derive(Debug, Clone, Serialize)]
pub struct ContentPage {
    pub first_index: usize,
    pub last_index: usize,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WorksheetPlan {
    pub cover: CoverPage,
    pub pages: Vec<ContentPage>,
    pub params: LayoutParams,
    pub metrics: PageMetrics,
}

// ────────────────────────────────────────────────────────────────────────────
// Planning
// ────────────────────────────────────────────────────────────────────────────

/// Lays the entries out into a paginated worksheet plan.
///
/// Entries are partitioned into consecutive chunks of `items_per_page`; chunk
/// `k` becomes content page `k` with header range
/// `[k*items_per_page + 1, k*items_per_page + chunk_len]`. An empty entry
/// list produces a cover-only plan.
pub fn plan_worksheet(
    title: &str,
    level_label: &str,
    entries: &[VocabularyEntry],
    params: LayoutParams,
    metrics: PageMetrics,
) -> WorksheetPlan {
    let cover = CoverPage {
        title: title.to_string(),
        subtitle: format!("{level_label} — {COVER_SUBTITLE}"),
    };

    let items = params.items_per_page() as usize;
    let pages = entries
        .chunks(items)
        .enumerate()
        .map(|(k, chunk)| ContentPage {
            first_index: k * items + 1,
            last_index: k * items + chunk.len(),
            cells: layout_cells(chunk, params, metrics),
        })
        .collect();

    WorksheetPlan {
        cover,
        pages,
        params,
        metrics,
    }
}

/// Places one chunk into a full `rows × columns` grid of uniform cells,
/// row-major (row 0 filled left-to-right first). Grid slots past the chunk
/// length become blank cells.
fn layout_cells(chunk: &[VocabularyEntry], params: LayoutParams, metrics: PageMetrics) -> Vec<Cell> {
    let columns = params.columns_per_row() as usize;
    let rows = params.rows_per_page() as usize;

    let cell_w = metrics.available_width() / columns as f32;
    let cell_h = metrics.available_height() / rows as f32;

    let mut cells = Vec::with_capacity(rows * columns);
    for row in 0..rows {
        for col in 0..columns {
            let rect = Rect {
                x: metrics.margin_left + col as f32 * cell_w,
                y: metrics.content_top() - (row as f32 + 1.0) * cell_h,
                w: cell_w,
                h: cell_h,
            };
            let (label_band, guide_band) = rect.split_bands();
            cells.push(Cell {
                rect,
                label_band,
                guide_band,
                entry: chunk.get(row * columns + col).cloned(),
            });
        }
    }
    cells
}

/// Gloss as shown in a cell: truncated to [`GLOSS_DISPLAY_CHARS`] characters,
/// with an ellipsis when anything was cut. The stored gloss is untouched.
pub fn display_gloss(gloss: &str) -> String {
    let mut chars = gloss.chars();
    let mut shown: String = chars.by_ref().take(GLOSS_DISPLAY_CHARS).collect();
    if chars.next().is_some() {
        shown.push('…');
    }
    shown
}
