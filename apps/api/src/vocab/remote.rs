//! Remote wordlist fetcher — the single point of HTTP access for vocabulary
//! data. All remote retrieval goes through [`VocabFetcher`] so the source
//! adapter can be exercised with scripted outcomes in tests.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use super::{Level, VocabularyEntry};

/// Hard cap on records taken from one remote wordlist.
pub const MAX_REMOTE_RECORDS: usize = 300;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("remote returned status {0}")]
    Status(u16),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("wordlist payload is not a JSON array")]
    NotAnArray,

    #[error("remote wordlist contained no usable records")]
    Empty,
}

/// Abstraction over the remote vocabulary endpoint.
#[async_trait]
pub trait VocabFetcher: Send + Sync {
    async fn fetch(&self, level: Level) -> Result<Vec<VocabularyEntry>, FetchError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HTTP implementation
// ────────────────────────────────────────────────────────────────────────────

/// Fetches published HSK wordlists over HTTP. One GET per level, bounded
/// timeout, single attempt — retry/backoff is deliberately out of scope; the
/// source adapter falls back to the embedded dataset instead.
pub struct HttpVocabFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpVocabFetcher {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl VocabFetcher for HttpVocabFetcher {
    async fn fetch(&self, level: Level) -> Result<Vec<VocabularyEntry>, FetchError> {
        let url = format!("{}/{}", self.base_url, level.remote_path());
        debug!(%url, "fetching remote wordlist");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: Value = serde_json::from_str(&body)?;

        let entries = normalize_records(&payload)?;
        if entries.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(entries)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record normalization
// ────────────────────────────────────────────────────────────────────────────

/// Normalizes a wordlist payload into vocabulary entries.
///
/// The published lists are arrays of loosely-shaped objects; every field is
/// extracted leniently so one malformed record never aborts parsing of its
/// siblings. Records without a glyph are dropped. The result is capped at
/// [`MAX_REMOTE_RECORDS`].
pub fn normalize_records(payload: &Value) -> Result<Vec<VocabularyEntry>, FetchError> {
    let records = payload.as_array().ok_or(FetchError::NotAnArray)?;

    Ok(records
        .iter()
        .filter_map(entry_from_record)
        .take(MAX_REMOTE_RECORDS)
        .collect())
}

/// Extracts one entry from a wordlist record, or `None` if the record carries
/// no glyph. Missing fields default to empty string / 0.
fn entry_from_record(record: &Value) -> Option<VocabularyEntry> {
    let character = record
        .get("simplified")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .trim()
        .to_string();
    if character.is_empty() {
        return None;
    }

    let pinyin = record
        .get("pinyin")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let gloss = first_meaning(record.get("meanings"));

    let stroke_count = record
        .get("strokes")
        .and_then(Value::as_u64)
        .map(|n| n.min(u16::MAX as u64) as u16)
        .unwrap_or(0);

    Some(VocabularyEntry {
        character,
        pinyin,
        gloss,
        stroke_count,
    })
}

/// First available gloss from the list-valued meanings field. Accepts both
/// `[{"meaning": "..."}]` and `["..."]` shapes.
fn first_meaning(meanings: Option<&Value>) -> String {
    meanings
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .map(|first| match first {
            Value::String(s) => s.clone(),
            other => other
                .get("meaning")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_full_record() {
        let payload = json!([{
            "simplified": "爱",
            "pinyin": "ài",
            "meanings": [{"meaning": "to love"}],
            "strokes": 10
        }]);
        let entries = normalize_records(&payload).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].character, "爱");
        assert_eq!(entries[0].pinyin, "ài");
        assert_eq!(entries[0].gloss, "to love");
        assert_eq!(entries[0].stroke_count, 10);
    }

    #[test]
    fn test_missing_fields_default() {
        let payload = json!([{"simplified": "八"}]);
        let entries = normalize_records(&payload).unwrap();
        assert_eq!(entries[0].pinyin, "");
        assert_eq!(entries[0].gloss, "");
        assert_eq!(entries[0].stroke_count, 0);
    }

    #[test]
    fn test_empty_glyph_is_dropped() {
        let payload = json!([
            {"simplified": "", "pinyin": "x"},
            {"pinyin": "y"},
            {"simplified": "  "},
            {"simplified": "白", "strokes": 5}
        ]);
        let entries = normalize_records(&payload).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].character, "白");
    }

    #[test]
    fn test_malformed_record_does_not_abort_siblings() {
        let payload = json!([
            {"simplified": "白", "strokes": "five", "meanings": "not a list"},
            {"simplified": "北", "strokes": 5}
        ]);
        let entries = normalize_records(&payload).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].stroke_count, 0);
        assert_eq!(entries[0].gloss, "");
        assert_eq!(entries[1].stroke_count, 5);
    }

    #[test]
    fn test_string_meanings_accepted() {
        let payload = json!([{"simplified": "高", "meanings": ["tall", "high"]}]);
        let entries = normalize_records(&payload).unwrap();
        assert_eq!(entries[0].gloss, "tall");
    }

    #[test]
    fn test_non_array_payload_rejected() {
        let payload = json!({"words": []});
        assert!(matches!(
            normalize_records(&payload),
            Err(FetchError::NotAnArray)
        ));
    }

    #[test]
    fn test_record_cap() {
        let records: Vec<_> = (0..MAX_REMOTE_RECORDS + 50)
            .map(|i| json!({"simplified": format!("字{i}")}))
            .collect();
        let entries = normalize_records(&Value::Array(records)).unwrap();
        assert_eq!(entries.len(), MAX_REMOTE_RECORDS);
    }
}
