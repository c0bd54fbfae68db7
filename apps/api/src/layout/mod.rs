// Worksheet layout engine: pure geometry from entries + parameters to a page
// plan. No I/O here — rendering happens in `render`, and CPU-bound plan+render
// work must run inside tokio::task::spawn_blocking.

pub mod font_metrics;
pub mod grid;
pub mod page;

// Re-export the public API consumed by other modules (render, handlers).
pub use grid::{
    display_gloss, plan_worksheet, Cell, ContentPage, CoverPage, LayoutError, LayoutParams,
    WorksheetPlan,
};
pub use page::{guide_grid, GuideGrid, PageMetrics, Rect, Segment, A4};
