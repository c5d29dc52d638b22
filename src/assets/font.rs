use std::path::{Path, PathBuf};

/// Family used when no custom font is available.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";
/// Alias the quiz registers its custom font under.
pub const QUIZ_FONT_FAMILY: &str = "NotoSansCJK";

/// Where the resolved font came from.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FontSource {
    /// Loaded from a font file.
    Custom {
        /// File the faces were read from.
        path: PathBuf,
    },
    /// Nothing was loaded; the generic family is used.
    Fallback,
}

/// Outcome of the one-time font load.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedFont {
    /// Primary family name.
    pub family: String,
    /// Source of `family`.
    pub source: FontSource,
}

impl ResolvedFont {
    /// The generic fallback.
    pub fn fallback() -> Self {
        Self {
            family: DEFAULT_FONT_FAMILY.to_owned(),
            source: FontSource::Fallback,
        }
    }

    /// True when a custom font was loaded.
    pub fn is_custom(&self) -> bool {
        matches!(self.source, FontSource::Custom { .. })
    }

    /// Family stack placed on text elements, e.g. `"NotoSansCJK, sans-serif"`.
    pub fn css_stack(&self) -> String {
        match self.source {
            FontSource::Custom { .. } => format!("{}, {DEFAULT_FONT_FAMILY}", self.family),
            FontSource::Fallback => self.family.clone(),
        }
    }
}

/// Loads a custom font once before evaluation and never fails the render.
///
/// Load errors are reported with `tracing::warn!` and resolve to [`ResolvedFont::fallback`].
#[derive(Debug, Default)]
pub struct FontGate;

impl FontGate {
    /// Resolve `path` (if any) to a usable family.
    pub fn load(path: Option<&Path>) -> ResolvedFont {
        let Some(path) = path else {
            tracing::debug!("no custom font requested, using {DEFAULT_FONT_FAMILY}");
            return ResolvedFont::fallback();
        };

        let mut db = usvg::fontdb::Database::new();
        if let Err(e) = db.load_font_file(path) {
            tracing::warn!(path = %path.display(), error = %e, "font load failed, falling back");
            return ResolvedFont::fallback();
        }
        if db.is_empty() {
            tracing::warn!(path = %path.display(), "font file has no usable faces, falling back");
            return ResolvedFont::fallback();
        }

        let family = db
            .faces()
            .flat_map(|face| face.families.iter())
            .map(|(name, _)| name.trim())
            .find(|name| !name.is_empty())
            .unwrap_or(DEFAULT_FONT_FAMILY)
            .to_owned();
        tracing::debug!(path = %path.display(), %family, faces = db.len(), "custom font loaded");

        ResolvedFont {
            family,
            source: FontSource::Custom {
                path: path.to_path_buf(),
            },
        }
    }

    /// Like [`Self::load`], but a loaded font is exposed under `alias` instead of its face name.
    pub fn load_as(path: Option<&Path>, alias: &str) -> ResolvedFont {
        let mut font = Self::load(path);
        if font.is_custom() {
            font.family = alias.to_owned();
        }
        font
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/font.rs"]
mod tests;
