//! Static font metrics for centering text without rasterizing.
//!
//! Widths are in em units (relative to font size). A static table is an
//! intentional approximation: it centers label lines to within a fraction of
//! a millimetre, which is indistinguishable on a printed worksheet. The table
//! covers ASCII 0x20..=0x7E; CJK ideographs are square by design and measure
//! a fixed 1.0 em; everything else (tone-marked pinyin vowels, ellipsis)
//! falls back to an average width.

/// Points to millimetres.
pub const PT_TO_MM: f32 = 25.4 / 72.0;

pub struct FontMetricTable {
    /// `widths[i]` = width of ASCII character `(i + 32)`.
    widths: [f32; 95],
    /// Fallback for non-ASCII, non-CJK characters.
    average_char_width: f32,
    /// CJK ideographs occupy a full em square.
    cjk_char_width: f32,
}

impl FontMetricTable {
    /// Measures a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else if is_cjk(c) {
                    self.cjk_char_width
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Measures a string in millimetres at the given font size.
    pub fn measure_mm(&self, s: &str, font_size_pt: f32) -> f32 {
        self.measure_str(s) * font_size_pt * PT_TO_MM
    }

    /// X position (mm) that centers `s` on `center_x` at the given size.
    pub fn centered_x(&self, s: &str, font_size_pt: f32, center_x: f32) -> f32 {
        center_x - self.measure_mm(s, font_size_pt) / 2.0
    }
}

/// CJK Unified Ideographs and neighboring full-width blocks.
fn is_cjk(c: char) -> bool {
    matches!(u32::from(c),
        0x2E80..=0x303F       // radicals, punctuation
        | 0x3400..=0x4DBF     // extension A
        | 0x4E00..=0x9FFF     // unified ideographs
        | 0xF900..=0xFAFF     // compatibility ideographs
        | 0xFF00..=0xFFEF     // full-width forms
    )
}

/// Helvetica AFM widths (per mille, scaled to em). The builtin fallback font
/// uses exactly these; the embedded CJK face's Latin glyphs are close enough
/// for centering.
const LABEL_WIDTHS: [f32; 95] = [
    0.278, 0.278, 0.355, 0.556, 0.556, 0.889, 0.667, 0.191, // space ! " # $ % & '
    0.333, 0.333, 0.389, 0.584, 0.278, 0.333, 0.278, 0.278, // ( ) * + , - . /
    0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, 0.556, // 0 1 2 3 4 5 6 7
    0.556, 0.556, 0.278, 0.278, 0.584, 0.584, 0.584, 0.556, // 8 9 : ; < = > ?
    1.015, 0.667, 0.667, 0.722, 0.722, 0.667, 0.611, 0.778, // @ A B C D E F G
    0.722, 0.278, 0.500, 0.667, 0.556, 0.833, 0.722, 0.778, // H I J K L M N O
    0.667, 0.778, 0.722, 0.667, 0.611, 0.722, 0.667, 0.944, // P Q R S T U V W
    0.667, 0.667, 0.611, 0.278, 0.278, 0.278, 0.469, 0.556, // X Y Z [ \ ] ^ _
    0.333, 0.556, 0.556, 0.500, 0.556, 0.556, 0.278, 0.556, // ` a b c d e f g
    0.556, 0.222, 0.222, 0.500, 0.222, 0.833, 0.556, 0.556, // h i j k l m n o
    0.556, 0.556, 0.333, 0.500, 0.278, 0.556, 0.500, 0.722, // p q r s t u v w
    0.500, 0.500, 0.500, 0.334, 0.260, 0.334, 0.584,        // x y z { | } ~
];

static LABEL_METRICS: FontMetricTable = FontMetricTable {
    widths: LABEL_WIDTHS,
    average_char_width: 0.556,
    cjk_char_width: 1.0,
};

/// Metrics used for every text line on the worksheet.
pub fn label_metrics() -> &'static FontMetricTable {
    &LABEL_METRICS
}
