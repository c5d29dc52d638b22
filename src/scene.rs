pub(crate) mod choice;
pub(crate) mod element;
pub(crate) mod end;
pub(crate) mod glyphs;
pub(crate) mod title_banner;
pub(crate) mod title_options;

use crate::animation::spring::{SpringConfig, spring};
use crate::assets::text::TextMeasurer;
use crate::foundation::core::{Canvas, Fps};
use crate::scene::element::TextStyle;
use crate::theme::daily::Theme;

/// Everything a scene renderer needs besides its own content and frame.
#[derive(Clone, Copy, Debug)]
pub struct SceneCtx<'a> {
    /// Composition frame rate.
    pub fps: Fps,
    /// Composition canvas.
    pub canvas: Canvas,
    /// The render's single theme.
    pub theme: &'a Theme,
    /// Font family stack placed on every text element.
    pub font_family: &'a str,
    /// Spring used for entrance animations.
    pub spring: SpringConfig,
    /// Wraps text to size its layout boxes.
    pub text: &'a TextMeasurer,
}

impl SceneCtx<'_> {
    /// Spring progress for an animation triggered `delay` frames after `local_frame` 0.
    pub fn progress(&self, local_frame: i64, delay: i64) -> f64 {
        spring(local_frame.saturating_sub(delay), self.fps, self.spring)
    }

    /// Height of `content` set in `style` and wrapped at `max_width`.
    pub(crate) fn text_height(
        &self,
        style: &TextStyle<'_>,
        content: &str,
        max_width: f64,
    ) -> f64 {
        let lines = self.text.line_count(content, style.font_size, max_width);
        lines as f64 * style.font_size * style.line_height
    }
}

#[cfg(test)]
#[path = "../tests/unit/scene.rs"]
mod tests;
