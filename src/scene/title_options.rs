use kurbo::{Rect, Vec2};

use crate::animation::interpolate::remap;
use crate::composition::model::QuestionData;
use crate::scene::SceneCtx;
use crate::scene::element::{Element, TextAlign, TextStyle};
use crate::scene::glyphs::option_letter;

/// Frames before the options block starts fading in.
pub const OPTIONS_FADE_DELAY: i64 = 20;
/// Frames before the first option starts sliding in.
pub const OPTION_BASE_DELAY: i64 = 30;
/// Extra delay per option index.
pub const OPTION_STAGGER: i64 = 10;

const TITLE_TOP: f64 = 0.2;
const TITLE_WIDTH: f64 = 0.9;
const TITLE_FONT_SIZE: f64 = 80.0;
const TITLE_LIFT: f64 = -100.0;

const OPTIONS_TOP: f64 = 0.5;
const OPTIONS_WIDTH: f64 = 0.85;
const OPTION_FONT_SIZE: f64 = 50.0;
const OPTION_PAD_X: f64 = 30.0;
const OPTION_PAD_Y: f64 = 25.0;
const OPTION_GAP: f64 = 15.0;
const OPTION_RADIUS: f64 = 15.0;

/// `QuestionTemplate1`: a dropping title followed by lettered options sliding in from the right.
#[derive(Clone, Copy, Debug)]
pub struct TitleOptionsScene<'a> {
    /// Question and options.
    pub data: &'a QuestionData,
}

impl TitleOptionsScene<'_> {
    /// Elements at `frame` (the scene starts at frame 0), background first.
    pub fn render(&self, frame: i64, ctx: &SceneCtx<'_>) -> Vec<Element> {
        let theme = ctx.theme;
        let w = ctx.canvas.width_f64();
        let h = ctx.canvas.height_f64();

        let mut out = Vec::with_capacity(2 + 2 * self.data.options.len());
        out.push(Element::block(
            "background",
            ctx.canvas.rect(),
            theme.background_color,
            0.0,
        ));

        let title_p = ctx.progress(frame, 0);
        let title_style =
            TextStyle::new(TITLE_FONT_SIZE, 700, theme.primary_color, ctx.font_family);
        let title_w = w * TITLE_WIDTH;
        let title_top = h * TITLE_TOP;
        let title_rect = Rect::new(
            (w - title_w) / 2.0,
            title_top,
            (w + title_w) / 2.0,
            title_top + ctx.text_height(&title_style, &self.data.question, title_w),
        );
        out.push(
            Element::text("title", title_rect, &self.data.question, &title_style)
                .with_translate(Vec2::new(0.0, remap(title_p, [0.0, 1.0], [TITLE_LIFT, 0.0])))
                .with_opacity(title_p),
        );

        let block_opacity = ctx.progress(frame, OPTIONS_FADE_DELAY);
        let label_style = TextStyle::new(OPTION_FONT_SIZE, 600, theme.text_color, ctx.font_family)
            .align(TextAlign::Left);
        let block_w = w * OPTIONS_WIDTH;
        let label_w = block_w - 2.0 * OPTION_PAD_X;
        let x0 = (w - block_w) / 2.0;
        let mut y = h * OPTIONS_TOP + OPTION_GAP;

        for (i, option) in self.data.options.iter().enumerate() {
            let p = ctx.progress(frame, OPTION_BASE_DELAY + OPTION_STAGGER * i as i64);
            let slide = Vec2::new(remap(p, [0.0, 1.0], [w, 0.0]), 0.0);

            let label = match option_letter(i) {
                Some(letter) => format!("{letter}. {option}"),
                None => option.clone(),
            };
            let card_h = OPTION_PAD_Y * 2.0 + ctx.text_height(&label_style, &label, label_w);
            let card = Rect::new(x0, y, x0 + block_w, y + card_h);
            out.push(
                Element::block(
                    format!("option-{i}"),
                    card,
                    theme.accent_color,
                    OPTION_RADIUS,
                )
                .with_translate(slide)
                .with_opacity(block_opacity),
            );
            out.push(
                Element::text(
                    format!("option-{i}-label"),
                    card.inset((-OPTION_PAD_X, -OPTION_PAD_Y)),
                    label,
                    &label_style,
                )
                .with_translate(slide)
                .with_opacity(block_opacity),
            );
            y += card_h + OPTION_GAP;
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/title_options.rs"]
mod tests;
