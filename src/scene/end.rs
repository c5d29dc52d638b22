use kurbo::Rect;

use crate::animation::interpolate::remap;
use crate::foundation::color::Color;
use crate::scene::SceneCtx;
use crate::scene::element::{Element, TextStyle};

const MESSAGE_FONT_SIZE: f64 = 65.0;
const MESSAGE_LINE_HEIGHT: f64 = 1.4;
const SIDE_PADDING: f64 = 60.0;
const SCALE_FROM: f64 = 0.8;

/// Closing scene: the end message grows and fades in around the canvas center.
#[derive(Clone, Copy, Debug)]
pub struct EndScene<'a> {
    /// Primary message; `\n` separates lines.
    pub message: &'a str,
}

impl EndScene<'_> {
    /// Elements at window-local `frame`, background first.
    pub fn render(&self, frame: i64, ctx: &SceneCtx<'_>) -> Vec<Element> {
        let w = ctx.canvas.width_f64();
        let center = ctx.canvas.rect().center();

        let p = ctx.progress(frame, 0);
        let scale = remap(p, [0.0, 1.0], [SCALE_FROM, 1.0]);

        let style = TextStyle::new(
            MESSAGE_FONT_SIZE,
            700,
            ctx.theme.primary_color,
            ctx.font_family,
        )
        .line_height(MESSAGE_LINE_HEIGHT);

        let (x0, x1) = (SIDE_PADDING, w - SIDE_PADDING);
        let h = ctx.text_height(&style, self.message, x1 - x0);
        let top = center.y - h / 2.0;

        vec![
            Element::block("end-background", ctx.canvas.rect(), Color::BLACK, 0.0),
            Element::text("end-message", Rect::new(x0, top, x1, top + h), self.message, &style)
                .with_scale(scale, center)
                .with_opacity(p),
        ]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/end.rs"]
mod tests;
