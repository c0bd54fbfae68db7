//! Startup font selection.
//!
//! The capability check runs ONCE, at startup: either the configured
//! CJK-capable TrueType file loads, or we fall back to the builtin base font.
//! The resulting handle is passed down to every render — there is no
//! per-draw try/fallback.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

/// The font the renderer embeds into every document.
#[derive(Clone)]
pub enum FontSelection {
    /// A CJK-capable TrueType face loaded from disk.
    Embedded { name: String, bytes: Arc<Vec<u8>> },
    /// Builtin Helvetica. CJK glyphs degrade to missing-glyph boxes, but
    /// generation always completes.
    Builtin,
}

impl FontSelection {
    pub fn describe(&self) -> String {
        match self {
            FontSelection::Embedded { name, .. } => name.clone(),
            FontSelection::Builtin => "builtin Helvetica".to_string(),
        }
    }
}

/// Performs the one-time capability check for the glyph font.
pub fn select_font(path: &Path) -> FontSelection {
    match fs::read(path) {
        Ok(bytes) if !bytes.is_empty() => {
            let name = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "embedded".to_string());
            info!(font = %name, bytes = bytes.len(), "CJK font loaded");
            FontSelection::Embedded {
                name,
                bytes: Arc::new(bytes),
            }
        }
        Ok(_) => {
            warn!(
                path = %path.display(),
                "CJK font file is empty, falling back to builtin Helvetica"
            );
            FontSelection::Builtin
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "CJK font unavailable, falling back to builtin Helvetica"
            );
            FontSelection::Builtin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_falls_back_to_builtin() {
        let selection = select_font(Path::new("/nonexistent/font.ttf"));
        assert!(matches!(selection, FontSelection::Builtin));
    }

    #[test]
    fn test_describe_builtin() {
        assert_eq!(FontSelection::Builtin.describe(), "builtin Helvetica");
    }
}
