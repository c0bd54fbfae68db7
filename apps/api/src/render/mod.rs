//! PDF serialization of a worksheet plan.
//!
//! The renderer is a thin walker over [`WorksheetPlan`]: all geometry was
//! decided by the layout engine; this module only turns rectangles, segments
//! and label lines into printpdf operations. Serialization is the one phase
//! whose failure propagates to the caller as a hard error.

pub mod fonts;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};
use thiserror::Error;

use crate::layout::font_metrics::label_metrics;
use crate::layout::{guide_grid, Cell, ContentPage, Rect, Segment, WorksheetPlan};
use crate::vocab::VocabularyEntry;
use fonts::FontSelection;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

// Type sizes in points — fixed; cells never scale type to content.
const TITLE_SIZE: f32 = 28.0;
const SCRIPT_TITLE_SIZE: f32 = 16.0;
const SUBTITLE_SIZE: f32 = 12.0;
const HEADER_SIZE: f32 = 11.0;
const GLYPH_SIZE: f32 = 32.0;
const PINYIN_SIZE: f32 = 9.0;
const GLOSS_SIZE: f32 = 8.0;
const STROKES_SIZE: f32 = 7.0;

// Label-band baselines as fractions of the band height, measured from its
// bottom edge. Positions scale with the cell; type sizes do not.
const GLYPH_BASELINE: f32 = 0.42;
const PINYIN_BASELINE: f32 = 0.28;
const GLOSS_BASELINE: f32 = 0.17;
const STROKES_BASELINE: f32 = 0.07;

/// Exam name drawn on the cover above the subtitle.
const SCRIPT_TITLE: &str = "汉语水平考试";

fn gray(level: f32) -> Color {
    Color::Rgb(Rgb::new(level, level, level, None))
}

/// Serializes a worksheet plan to PDF bytes.
pub fn render_pdf(plan: &WorksheetPlan, font: &FontSelection) -> Result<Vec<u8>, RenderError> {
    let m = plan.metrics;
    let (doc, cover_page, cover_layer) =
        PdfDocument::new(plan.cover.title.as_str(), Mm(m.width), Mm(m.height), "cover");

    let font_ref = match font {
        FontSelection::Embedded { bytes, .. } => {
            doc.add_external_font(std::io::Cursor::new(bytes.as_slice()))?
        }
        FontSelection::Builtin => doc.add_builtin_font(BuiltinFont::Helvetica)?,
    };

    draw_cover(&doc.get_page(cover_page).get_layer(cover_layer), plan, &font_ref);

    for page in &plan.pages {
        let (page_idx, layer_idx) = doc.add_page(
            Mm(m.width),
            Mm(m.height),
            format!("characters {}-{}", page.first_index, page.last_index),
        );
        draw_content_page(
            &doc.get_page(page_idx).get_layer(layer_idx),
            page,
            plan,
            &font_ref,
        );
    }

    Ok(doc.save_to_bytes()?)
}

// ────────────────────────────────────────────────────────────────────────────
// Page drawing
// ────────────────────────────────────────────────────────────────────────────

fn draw_cover(layer: &PdfLayerReference, plan: &WorksheetPlan, font: &IndirectFontRef) {
    let m = plan.metrics;
    let metrics = label_metrics();
    let center = m.width / 2.0;
    let title_y = m.height - 110.0;

    layer.set_fill_color(gray(0.1));
    layer.use_text(
        plan.cover.title.as_str(),
        TITLE_SIZE,
        Mm(metrics.centered_x(&plan.cover.title, TITLE_SIZE, center)),
        Mm(title_y),
        font,
    );

    layer.set_fill_color(gray(0.25));
    layer.use_text(
        SCRIPT_TITLE,
        SCRIPT_TITLE_SIZE,
        Mm(metrics.centered_x(SCRIPT_TITLE, SCRIPT_TITLE_SIZE, center)),
        Mm(title_y - 16.0),
        font,
    );

    layer.set_fill_color(gray(0.4));
    layer.use_text(
        plan.cover.subtitle.as_str(),
        SUBTITLE_SIZE,
        Mm(metrics.centered_x(&plan.cover.subtitle, SUBTITLE_SIZE, center)),
        Mm(title_y - 26.0),
        font,
    );
}

fn draw_content_page(
    layer: &PdfLayerReference,
    page: &ContentPage,
    plan: &WorksheetPlan,
    font: &IndirectFontRef,
) {
    let m = plan.metrics;

    layer.set_fill_color(gray(0.35));
    layer.use_text(
        format!("Characters {} - {}", page.first_index, page.last_index),
        HEADER_SIZE,
        Mm(m.margin_left),
        Mm(m.header_baseline()),
        font,
    );

    // Cell borders.
    layer.set_outline_color(gray(0.8));
    layer.set_outline_thickness(0.75);
    for cell in &page.cells {
        stroke_rect(layer, &cell.rect);
    }

    // Guide sub-grids — blank cells render these too.
    for cell in &page.cells {
        let grid = guide_grid(cell.guide_band);
        layer.set_outline_color(gray(0.75));
        layer.set_outline_thickness(0.6);
        for rule in &grid.rules {
            stroke_segment(layer, rule);
        }
        layer.set_outline_color(gray(0.88));
        layer.set_outline_thickness(0.3);
        for diagonal in &grid.diagonals {
            stroke_segment(layer, diagonal);
        }
    }

    for cell in &page.cells {
        if let Some(entry) = &cell.entry {
            draw_cell_labels(layer, cell, entry, font);
        }
    }
}

fn draw_cell_labels(
    layer: &PdfLayerReference,
    cell: &Cell,
    entry: &VocabularyEntry,
    font: &IndirectFontRef,
) {
    let metrics = label_metrics();
    let band = cell.label_band;
    let center = band.center_x();
    let baseline = |fraction: f32| band.y + band.h * fraction;

    layer.set_fill_color(gray(0.0));
    layer.use_text(
        entry.character.as_str(),
        GLYPH_SIZE,
        Mm(metrics.centered_x(&entry.character, GLYPH_SIZE, center)),
        Mm(baseline(GLYPH_BASELINE)),
        font,
    );

    layer.set_fill_color(gray(0.3));
    layer.use_text(
        entry.pinyin.as_str(),
        PINYIN_SIZE,
        Mm(metrics.centered_x(&entry.pinyin, PINYIN_SIZE, center)),
        Mm(baseline(PINYIN_BASELINE)),
        font,
    );

    let gloss = crate::layout::display_gloss(&entry.gloss);
    layer.set_fill_color(gray(0.45));
    layer.use_text(
        gloss.as_str(),
        GLOSS_SIZE,
        Mm(metrics.centered_x(&gloss, GLOSS_SIZE, center)),
        Mm(baseline(GLOSS_BASELINE)),
        font,
    );

    let strokes = format_strokes(entry.stroke_count);
    layer.set_fill_color(gray(0.55));
    layer.use_text(
        strokes.as_str(),
        STROKES_SIZE,
        Mm(metrics.centered_x(&strokes, STROKES_SIZE, center)),
        Mm(baseline(STROKES_BASELINE)),
        font,
    );
}

/// Stroke-count label. 0 is the "unknown" sentinel and shows as `?`.
fn format_strokes(count: u16) -> String {
    if count == 0 {
        "strokes: ?".to_string()
    } else {
        format!("strokes: {count}")
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Primitives
// ────────────────────────────────────────────────────────────────────────────

fn stroke_segment(layer: &PdfLayerReference, s: &Segment) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(s.x1), Mm(s.y1)), false),
            (Point::new(Mm(s.x2), Mm(s.y2)), false),
        ],
        is_closed: false,
    });
}

fn stroke_rect(layer: &PdfLayerReference, r: &Rect) {
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(r.x), Mm(r.y)), false),
            (Point::new(Mm(r.right()), Mm(r.y)), false),
            (Point::new(Mm(r.right()), Mm(r.top())), false),
            (Point::new(Mm(r.x), Mm(r.top())), false),
        ],
        is_closed: true,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{plan_worksheet, LayoutParams, A4};
    use crate::vocab::VocabularyEntry;

    fn make_entries(n: usize) -> Vec<VocabularyEntry> {
        (0..n)
            .map(|i| VocabularyEntry {
                character: "水".to_string(),
                pinyin: "shuǐ".to_string(),
                gloss: "water".to_string(),
                stroke_count: (i % 12) as u16,
            })
            .collect()
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let params = LayoutParams::new(9, 3).unwrap();
        let plan = plan_worksheet("HSK 2 Writing Practice", "HSK 2", &make_entries(10), params, A4);

        let bytes = render_pdf(&plan, &FontSelection::Builtin).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1_000);
    }

    #[test]
    fn test_render_cover_only_document() {
        let params = LayoutParams::new(12, 3).unwrap();
        let plan = plan_worksheet("HSK 3 Writing Practice", "HSK 3", &[], params, A4);

        let bytes = render_pdf(&plan, &FontSelection::Builtin).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_format_strokes_unknown_sentinel() {
        assert_eq!(format_strokes(0), "strokes: ?");
        assert_eq!(format_strokes(10), "strokes: 10");
    }
}
