//! Vocabulary data model and source adapter.
//!
//! The adapter resolves the entry list for a study level from the published
//! remote wordlists, falling back to the embedded dataset on any failure.
//! Callers always receive a usable sequence — fetch problems never cross this
//! module boundary.

pub mod embedded;
pub mod remote;
pub mod source;

pub use remote::{FetchError, HttpVocabFetcher, VocabFetcher};
pub use source::VocabSource;

use serde::{Deserialize, Serialize};

/// One studyable vocabulary unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The glyph being practiced. Non-empty once normalized — entries with an
    /// empty character are dropped at the source and never laid out.
    pub character: String,
    /// Phonetic transcription (pinyin with tone marks). May be empty.
    pub pinyin: String,
    /// Short meaning. Stored untruncated; truncation is a display concern.
    pub gloss: String,
    /// Stroke count; 0 is the "unknown" sentinel, never an error.
    pub stroke_count: u16,
}

// ────────────────────────────────────────────────────────────────────────────
// Study levels
// ────────────────────────────────────────────────────────────────────────────

/// The supported HSK study levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Hsk2,
    Hsk3,
}

impl Level {
    pub const ALL: [Level; 2] = [Level::Hsk2, Level::Hsk3];

    pub fn number(self) -> u8 {
        match self {
            Level::Hsk2 => 2,
            Level::Hsk3 => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Level> {
        match n {
            2 => Some(Level::Hsk2),
            3 => Some(Level::Hsk3),
            _ => None,
        }
    }

    /// Human-facing label, e.g. `"HSK 2"`.
    pub fn label(self) -> String {
        format!("HSK {}", self.number())
    }

    /// Deterministic download filename for this level's worksheet.
    pub fn filename(self) -> String {
        format!("HSK_{}_Practice.pdf", self.number())
    }

    /// Path segment of the published wordlist for this level.
    pub fn remote_path(self) -> String {
        format!("{}.json", self.number())
    }
}
