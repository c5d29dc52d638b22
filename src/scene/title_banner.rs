use kurbo::Rect;

use crate::foundation::color::Color;
use crate::scene::SceneCtx;
use crate::scene::element::{Element, TextStyle};

const BANNER_TOP: f64 = 0.08;
const BANNER_MAX_WIDTH: f64 = 0.9;
const PAD_X: f64 = 35.0;
const PAD_Y: f64 = 20.0;
const RADIUS: f64 = 15.0;
const QUESTION_FONT_SIZE: f64 = 90.0;
const QUESTION_EN_FONT_SIZE: f64 = 48.0;
const QUESTION_EN_GAP: f64 = 8.0;
const QUESTION_EN_OPACITY: f64 = 0.9;

/// Question banner pinned above every scene of `QuizWithVideos`.
///
/// Unlike scene content it runs on the absolute frame: it fades in once at the start of the
/// video and stays.
#[derive(Clone, Copy, Debug)]
pub struct QuizTitleBanner<'a> {
    /// Question.
    pub question: &'a str,
    /// Translated question.
    pub question_en: &'a str,
}

impl QuizTitleBanner<'_> {
    /// Elements at absolute `frame`.
    pub fn render(&self, frame: i64, ctx: &SceneCtx<'_>) -> Vec<Element> {
        let w = ctx.canvas.width_f64();
        let h = ctx.canvas.height_f64();
        let opacity = ctx.progress(frame, 0);

        let q_style = TextStyle::new(QUESTION_FONT_SIZE, 700, Color::WHITE, ctx.font_family);
        let en_style = TextStyle::new(QUESTION_EN_FONT_SIZE, 600, Color::WHITE, ctx.font_family);
        let box_w = w * BANNER_MAX_WIDTH;
        let text_w = box_w - 2.0 * PAD_X;
        let q_h = ctx.text_height(&q_style, self.question, text_w);
        let en_h = ctx.text_height(&en_style, self.question_en, text_w);

        let x0 = (w - box_w) / 2.0;
        let top = h * BANNER_TOP;
        let panel = Rect::new(
            x0,
            top,
            x0 + box_w,
            top + PAD_Y + q_h + QUESTION_EN_GAP + en_h + PAD_Y,
        );
        let inner = panel.inset((-PAD_X, -PAD_Y));

        vec![
            Element::block("title-banner", panel, ctx.theme.primary_color, RADIUS)
                .with_opacity(opacity),
            Element::text(
                "title-question",
                Rect::new(inner.x0, inner.y0, inner.x1, inner.y0 + q_h),
                self.question,
                &q_style,
            )
            .with_opacity(opacity),
            Element::text(
                "title-question-en",
                Rect::new(inner.x0, inner.y1 - en_h, inner.x1, inner.y1),
                self.question_en,
                &en_style,
            )
            .with_opacity(opacity * QUESTION_EN_OPACITY),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/title_banner.rs"]
mod tests;
