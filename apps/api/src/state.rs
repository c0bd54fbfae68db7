use std::sync::Arc;

use crate::render::fonts::FontSelection;
use crate::vocab::VocabSource;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Vocabulary source adapter — remote fetch with embedded fallback,
    /// memoized per level for the process lifetime.
    pub vocab: Arc<VocabSource>,
    /// Font selected by the startup capability check; passed down to every render.
    pub font: FontSelection,
}
