//! The vocabulary source adapter: remote first, embedded fallback, memoized
//! per level. Nothing past this boundary ever sees a fetch failure.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, warn};

use super::remote::VocabFetcher;
use super::{embedded, Level, VocabularyEntry};

pub struct VocabSource {
    fetcher: Arc<dyn VocabFetcher>,
    /// First successful resolution per level, kept for the process lifetime.
    cache: RwLock<HashMap<Level, Arc<Vec<VocabularyEntry>>>>,
}

impl VocabSource {
    pub fn new(fetcher: Arc<dyn VocabFetcher>) -> Self {
        Self {
            fetcher,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolves the entry list for a level.
    ///
    /// Never fails: a remote failure of any kind (network, non-2xx, malformed
    /// payload, empty result) falls back to the embedded dataset. The result
    /// can only be empty if both remote and embedded data are empty, which
    /// the embedded tests rule out.
    pub async fn entries(&self, level: Level) -> Arc<Vec<VocabularyEntry>> {
        if let Some(cached) = self.cache.read().await.get(&level) {
            return Arc::clone(cached);
        }

        let resolved = Arc::new(self.resolve(level).await);

        // Two requests may race to resolve the same level; the first insert
        // wins and both callers see the same list.
        let mut cache = self.cache.write().await;
        Arc::clone(cache.entry(level).or_insert(resolved))
    }

    async fn resolve(&self, level: Level) -> Vec<VocabularyEntry> {
        match self.fetcher.fetch(level).await {
            Ok(entries) => {
                info!(
                    level = %level.label(),
                    count = entries.len(),
                    "remote wordlist loaded"
                );
                entries
            }
            Err(err) => {
                warn!(
                    level = %level.label(),
                    error = %err,
                    "remote wordlist unavailable, using embedded dataset"
                );
                embedded::entries(level)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::remote::FetchError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fetcher with a scripted outcome; counts how often it is called.
    struct ScriptedFetcher {
        outcome: Outcome,
        calls: AtomicUsize,
    }

    enum Outcome {
        Ok(Vec<VocabularyEntry>),
        Status(u16),
        Empty,
    }

    impl ScriptedFetcher {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl VocabFetcher for ScriptedFetcher {
        async fn fetch(&self, _level: Level) -> Result<Vec<VocabularyEntry>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::Ok(entries) => Ok(entries.clone()),
                Outcome::Status(code) => Err(FetchError::Status(*code)),
                Outcome::Empty => Err(FetchError::Empty),
            }
        }
    }

    fn make_entry(character: &str) -> VocabularyEntry {
        VocabularyEntry {
            character: character.to_string(),
            pinyin: "yī".to_string(),
            gloss: "one".to_string(),
            stroke_count: 1,
        }
    }

    #[tokio::test]
    async fn test_remote_success_passes_through() {
        let fetcher = ScriptedFetcher::new(Outcome::Ok(vec![make_entry("一")]));
        let source = VocabSource::new(fetcher.clone());

        let entries = source.entries(Level::Hsk2).await;
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].character, "一");
    }

    #[tokio::test]
    async fn test_non_2xx_falls_back_to_embedded() {
        let fetcher = ScriptedFetcher::new(Outcome::Status(503));
        let source = VocabSource::new(fetcher.clone());

        let entries = source.entries(Level::Hsk3).await;
        assert_eq!(*entries, embedded::entries(Level::Hsk3));
    }

    #[tokio::test]
    async fn test_empty_remote_falls_back_to_embedded() {
        let fetcher = ScriptedFetcher::new(Outcome::Empty);
        let source = VocabSource::new(fetcher.clone());

        let entries = source.entries(Level::Hsk2).await;
        assert_eq!(*entries, embedded::entries(Level::Hsk2));
    }

    #[tokio::test]
    async fn test_resolution_is_memoized_per_level() {
        let fetcher = ScriptedFetcher::new(Outcome::Ok(vec![make_entry("二")]));
        let source = VocabSource::new(fetcher.clone());

        source.entries(Level::Hsk2).await;
        source.entries(Level::Hsk2).await;
        source.entries(Level::Hsk2).await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

        source.entries(Level::Hsk3).await;
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 2);
    }
}
