use kurbo::{Rect, Vec2};

use crate::animation::interpolate::remap;
use crate::composition::model::Choice;
use crate::foundation::color::Color;
use crate::scene::SceneCtx;
use crate::scene::element::{Element, TextStyle};
use crate::scene::glyphs::circled_ordinal;

/// Window-local frame at which the caption starts rising in.
pub const CAPTION_DELAY: i64 = 30;

const VIDEO_TOP: f64 = 0.35;
const VIDEO_ASPECT: f64 = 9.0 / 16.0;
const PLACEHOLDER_FONT_SIZE: f64 = 120.0;

const CAPTION_BOTTOM: f64 = 0.05;
const CAPTION_RISE: f64 = 50.0;
const CAPTION_FONT_SIZE: f64 = 80.0;
const CAPTION_EN_FONT_SIZE: f64 = 48.0;
const CAPTION_EN_GAP: f64 = 8.0;
const CAPTION_EN_OPACITY: f64 = 0.9;

/// One choice window of `QuizWithVideos`: a 16:9 backdrop region plus a bilingual caption.
#[derive(Clone, Copy, Debug)]
pub struct ChoiceScene<'a> {
    /// The choice to show.
    pub choice: &'a Choice,
}

impl ChoiceScene<'_> {
    /// Elements at window-local `frame`, background first.
    pub fn render(&self, frame: i64, ctx: &SceneCtx<'_>) -> Vec<Element> {
        let theme = ctx.theme;
        let w = ctx.canvas.width_f64();
        let h = ctx.canvas.height_f64();
        let glyph = circled_ordinal(self.choice.number);

        let video_top = h * VIDEO_TOP;
        let video = Rect::new(0.0, video_top, w, video_top + w * VIDEO_ASPECT);

        let label_style = TextStyle::new(
            PLACEHOLDER_FONT_SIZE,
            700,
            theme.primary_color,
            ctx.font_family,
        );
        let label_h = ctx.text_height(&label_style, &self.choice.text, w);
        let label = Rect::new(
            0.0,
            video.center().y - label_h / 2.0,
            w,
            video.center().y + label_h / 2.0,
        );

        let p = ctx.progress(frame, CAPTION_DELAY);
        let rise = Vec2::new(0.0, remap(p, [0.0, 1.0], [CAPTION_RISE, 0.0]));

        let main_style = TextStyle::new(CAPTION_FONT_SIZE, 700, Color::WHITE, ctx.font_family);
        let en_style = TextStyle::new(CAPTION_EN_FONT_SIZE, 600, Color::WHITE, ctx.font_family);
        let main_text = format!("{glyph} {}", self.choice.text);
        let en_text = format!("{glyph} {}", self.choice.text_en);
        let main_h = ctx.text_height(&main_style, &main_text, w);
        let en_h = ctx.text_height(&en_style, &en_text, w);

        let caption_bottom = h - h * CAPTION_BOTTOM;
        let caption_top = caption_bottom - (main_h + CAPTION_EN_GAP + en_h);
        let main_rect = Rect::new(0.0, caption_top, w, caption_top + main_h);
        let en_rect = Rect::new(0.0, caption_bottom - en_h, w, caption_bottom);

        vec![
            Element::block("choice-background", ctx.canvas.rect(), Color::BLACK, 0.0),
            Element::video_placeholder(
                "choice-video",
                video,
                &self.choice.video_path,
                theme.background_color,
            ),
            Element::text("choice-video-label", label, &self.choice.text, &label_style),
            Element::text("choice-caption", main_rect, main_text, &main_style)
                .with_translate(rise)
                .with_opacity(p),
            Element::text("choice-caption-en", en_rect, en_text, &en_style)
                .with_translate(rise)
                .with_opacity(p * CAPTION_EN_OPACITY),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/choice.rs"]
mod tests;
