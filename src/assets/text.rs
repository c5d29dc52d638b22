use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::assets::font::{FontSource, ResolvedFont};

/// Advance used for wide (CJK, full-width) characters when no font can be shaped, in ems.
const WIDE_ADVANCE_EM: f64 = 1.0;
/// Advance used for every other character when no font can be shaped, in ems.
const NARROW_ADVANCE_EM: f64 = 0.55;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct MeasureBrush;

struct Shaper {
    font: parley::fontique::Blob<u8>,
    family: String,
}

impl Shaper {
    fn from_font_bytes(font_bytes: Vec<u8>) -> Option<Self> {
        let font = parley::fontique::Blob::from(font_bytes);
        let (_, family) = Self::register(&font)?;
        Some(Self { font, family })
    }

    fn register(font: &parley::fontique::Blob<u8>) -> Option<(parley::FontContext, String)> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx.collection.register_fonts(font.clone(), None);
        let family_id = families.first().map(|(id, _)| *id)?;
        let family = font_ctx.collection.family_name(family_id)?.to_string();
        Some((font_ctx, family))
    }

    fn line_count(&self, text: &str, size_px: f32, max_width_px: f32) -> usize {
        let Some((mut font_ctx, _)) = Self::register(&self.font) else {
            return 1;
        };
        let mut layout_ctx: parley::LayoutContext<MeasureBrush> = parley::LayoutContext::new();
        let mut builder = layout_ctx.ranged_builder(&mut font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Borrowed(self.family.as_str())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<MeasureBrush> = builder.build(text);
        layout.break_all_lines(Some(max_width_px));
        layout.lines().count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct MeasureKey {
    text: String,
    size_bits: u64,
    width_bits: u64,
}

/// Line-wrapping text measurement shared by every frame of a render.
///
/// With a font available, text is shaped and broken by Parley at the box width. Without one,
/// lines are broken on estimated advances (one em for wide characters). Results are cached per
/// `(text, size, width)`, so each distinct string is laid out once per render. Layout contexts
/// are built per measurement, which keeps the measurer shareable across render workers.
pub struct TextMeasurer {
    shaper: Option<Shaper>,
    cache: Mutex<HashMap<MeasureKey, usize>>,
}

impl std::fmt::Debug for TextMeasurer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextMeasurer")
            .field("shaped", &self.is_shaped())
            .finish_non_exhaustive()
    }
}

impl TextMeasurer {
    /// Measurer that never touches font data.
    pub fn estimating() -> Self {
        Self {
            shaper: None,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Measurer shaping with raw font bytes; estimates when the bytes hold no usable face.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> Self {
        let shaper = Shaper::from_font_bytes(font_bytes);
        if shaper.is_none() {
            tracing::warn!("font data has no usable family, text sizes are estimated");
        }
        Self {
            shaper,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Measurer for the font the render resolved: the custom file, else the system sans-serif
    /// face, else estimation.
    pub fn for_font(font: &ResolvedFont) -> Self {
        let bytes = match &font.source {
            FontSource::Custom { path } => std::fs::read(path)
                .map_err(|e| {
                    tracing::warn!(path = %path.display(), error = %e, "font re-read failed");
                })
                .ok(),
            FontSource::Fallback => system_sans_serif_bytes(),
        };
        match bytes {
            Some(bytes) => Self::from_font_bytes(bytes),
            None => {
                tracing::debug!("no font data available, text sizes are estimated");
                Self::estimating()
            }
        }
    }

    /// True when measurements come from shaped layouts.
    pub fn is_shaped(&self) -> bool {
        self.shaper.is_some()
    }

    /// Number of lines `text` occupies at `size_px` inside a box `max_width_px` wide.
    ///
    /// Embedded `\n` are hard breaks. An empty string still occupies one line.
    pub fn line_count(&self, text: &str, size_px: f64, max_width_px: f64) -> usize {
        let key = MeasureKey {
            text: text.to_owned(),
            size_bits: size_px.to_bits(),
            width_bits: max_width_px.to_bits(),
        };
        let cached = self
            .cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .copied();
        if let Some(n) = cached {
            return n;
        }

        let lines: usize = match &self.shaper {
            Some(shaper) => text
                .split('\n')
                .map(|line| shaper.line_count(line, size_px as f32, max_width_px as f32).max(1))
                .sum(),
            None => text
                .split('\n')
                .map(|line| estimated_line_count(line, size_px, max_width_px))
                .sum(),
        };
        let lines = usize::max(lines, 1);

        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, lines);
        lines
    }
}

fn system_sans_serif_bytes() -> Option<Vec<u8>> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    let id = db.query(&usvg::fontdb::Query {
        families: &[usvg::fontdb::Family::SansSerif],
        weight: usvg::fontdb::Weight::BOLD,
        ..Default::default()
    })?;
    db.with_face_data(id, |data, _| data.to_vec())
}

fn estimated_line_count(line: &str, size_px: f64, max_width_px: f64) -> usize {
    if max_width_px <= 0.0 {
        return line.chars().count().max(1);
    }
    let mut lines = 1;
    let mut x = 0.0;
    for c in line.chars() {
        let advance = size_px * if is_wide(c) { WIDE_ADVANCE_EM } else { NARROW_ADVANCE_EM };
        if x > 0.0 && x + advance > max_width_px {
            lines += 1;
            x = 0.0;
        }
        x += advance;
    }
    lines
}

fn is_wide(c: char) -> bool {
    matches!(
        c as u32,
        0x1100..=0x115F
            | 0x2460..=0x24FF
            | 0x2E80..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x1F300..=0x1FAFF
            | 0x20000..=0x3FFFD
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/text.rs"]
mod tests;
