//! Page geometry — millimetre-unit rectangles in PDF user space (origin at
//! the bottom-left corner of the page, y growing upwards) and the fixed
//! worksheet page metrics.

use serde::Serialize;

/// A rectangle in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn top(&self) -> f32 {
        self.y + self.h
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Splits the rectangle into two equal bands, returning `(upper, lower)`.
    pub fn split_bands(&self) -> (Rect, Rect) {
        let half = self.h / 2.0;
        (
            Rect {
                x: self.x,
                y: self.y + half,
                w: self.w,
                h: half,
            },
            Rect {
                x: self.x,
                y: self.y,
                w: self.w,
                h: half,
            },
        )
    }
}

/// A straight line segment in page space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

// ────────────────────────────────────────────────────────────────────────────
// Page metrics
// ────────────────────────────────────────────────────────────────────────────

/// Fixed page dimensions and reserved regions. The grid of cells occupies the
/// page minus the margins and, on content pages, a header band across the top.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageMetrics {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    /// Height reserved above the cell grid for the page header line.
    pub header_band: f32,
}

/// A4 portrait with the worksheet margins (1 cm sides, 1.5 cm top/bottom).
pub const A4: PageMetrics = PageMetrics {
    width: 210.0,
    height: 297.0,
    margin_left: 10.0,
    margin_right: 10.0,
    margin_top: 15.0,
    margin_bottom: 15.0,
    header_band: 10.0,
};

impl PageMetrics {
    pub fn available_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn available_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom - self.header_band
    }

    /// Top edge of the cell grid area. The header band sits directly above.
    pub fn content_top(&self) -> f32 {
        self.height - self.margin_top - self.header_band
    }

    /// Baseline for the content-page header line, inside the header band.
    pub fn header_baseline(&self) -> f32 {
        self.content_top() + 3.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Guide sub-grid
// ────────────────────────────────────────────────────────────────────────────

/// Squares per side of the handwriting guide sub-grid. Fixed regardless of
/// cell size — only the square size scales.
pub const GUIDE_GRID_DIM: usize = 4;

/// Breathing room between the guide grid and the edges of its band.
const GUIDE_GRID_INSET: f32 = 2.0;

/// Line work for one cell's guide sub-grid.
#[derive(Debug, Clone, Serialize)]
pub struct GuideGrid {
    /// Horizontal and vertical rules of the square grid (5 each way).
    pub rules: Vec<Segment>,
    /// Both diagonals of every square, drawn as faint guides.
    pub diagonals: Vec<Segment>,
}

/// Computes the guide sub-grid for a cell's lower band: a centered
/// [`GUIDE_GRID_DIM`]×[`GUIDE_GRID_DIM`] grid of uniform squares, each
/// bisected by both diagonals.
pub fn guide_grid(band: Rect) -> GuideGrid {
    let dim = GUIDE_GRID_DIM as f32;
    let usable_w = (band.w - 2.0 * GUIDE_GRID_INSET).max(0.0);
    let usable_h = (band.h - 2.0 * GUIDE_GRID_INSET).max(0.0);
    let square = usable_w.min(usable_h) / dim;
    let side = square * dim;

    let x0 = band.x + (band.w - side) / 2.0;
    let y0 = band.y + (band.h - side) / 2.0;

    let mut rules = Vec::with_capacity(2 * (GUIDE_GRID_DIM + 1));
    for i in 0..=GUIDE_GRID_DIM {
        let offset = i as f32 * square;
        rules.push(Segment {
            x1: x0 + offset,
            y1: y0,
            x2: x0 + offset,
            y2: y0 + side,
        });
        rules.push(Segment {
            x1: x0,
            y1: y0 + offset,
            x2: x0 + side,
            y2: y0 + offset,
        });
    }

    let mut diagonals = Vec::with_capacity(2 * GUIDE_GRID_DIM * GUIDE_GRID_DIM);
    for row in 0..GUIDE_GRID_DIM {
        for col in 0..GUIDE_GRID_DIM {
            let sx = x0 + col as f32 * square;
            let sy = y0 + row as f32 * square;
            diagonals.push(Segment {
                x1: sx,
                y1: sy,
                x2: sx + square,
                y2: sy + square,
            });
            diagonals.push(Segment {
                x1: sx,
                y1: sy + square,
                x2: sx + square,
                y2: sy,
            });
        }
    }

    GuideGrid { rules, diagonals }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn band() -> Rect {
        Rect {
            x: 10.0,
            y: 20.0,
            w: 60.0,
            h: 30.0,
        }
    }

    #[test]
    fn test_rule_and_diagonal_counts() {
        let grid = guide_grid(band());
        assert_eq!(grid.rules.len(), 10);
        assert_eq!(grid.diagonals.len(), 32);
    }

    #[test]
    fn test_grid_is_square_and_centered() {
        let b = band();
        let grid = guide_grid(b);

        let min_x = grid.rules.iter().map(|s| s.x1.min(s.x2)).fold(f32::MAX, f32::min);
        let max_x = grid.rules.iter().map(|s| s.x1.max(s.x2)).fold(f32::MIN, f32::max);
        let min_y = grid.rules.iter().map(|s| s.y1.min(s.y2)).fold(f32::MAX, f32::min);
        let max_y = grid.rules.iter().map(|s| s.y1.max(s.y2)).fold(f32::MIN, f32::max);

        let side_w = max_x - min_x;
        let side_h = max_y - min_y;
        assert!((side_w - side_h).abs() < EPS, "grid must be square");

        // Centered: equal slack on both sides of the band.
        assert!(((min_x - b.x) - (b.right() - max_x)).abs() < EPS);
        assert!(((min_y - b.y) - (b.top() - max_y)).abs() < EPS);
    }

    #[test]
    fn test_grid_fits_inside_band() {
        let b = band();
        let grid = guide_grid(b);
        for s in grid.rules.iter().chain(grid.diagonals.iter()) {
            for (x, y) in [(s.x1, s.y1), (s.x2, s.y2)] {
                assert!(x >= b.x - EPS && x <= b.right() + EPS);
                assert!(y >= b.y - EPS && y <= b.top() + EPS);
            }
        }
    }

    #[test]
    fn test_square_size_scales_with_band() {
        let small = guide_grid(Rect { x: 0.0, y: 0.0, w: 20.0, h: 20.0 });
        let large = guide_grid(Rect { x: 0.0, y: 0.0, w: 40.0, h: 40.0 });
        // Same topology, bigger squares.
        assert_eq!(small.rules.len(), large.rules.len());
        let small_side = small.rules[0].y2 - small.rules[0].y1;
        let large_side = large.rules[0].y2 - large.rules[0].y1;
        assert!(large_side > small_side);
    }

    #[test]
    fn test_split_bands_are_equal() {
        let r = band();
        let (upper, lower) = r.split_bands();
        assert!((upper.h - lower.h).abs() < EPS);
        assert!((upper.y - (lower.y + lower.h)).abs() < EPS);
        assert!((upper.top() - r.top()).abs() < EPS);
        assert!((lower.y - r.y).abs() < EPS);
    }

    #[test]
    fn test_a4_available_area() {
        assert!((A4.available_width() - 190.0).abs() < EPS);
        assert!((A4.available_height() - 257.0).abs() < EPS);
        assert!((A4.content_top() - 272.0).abs() < EPS);
    }
}
