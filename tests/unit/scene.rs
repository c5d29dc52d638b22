use super::*;
use crate::animation::spring::DEFAULT_SPRING;
use crate::composition::registry::{CANVAS, FPS};
use crate::foundation::color::Color;
use crate::theme::daily::{Weekday, resolve};

fn ctx(text: &TextMeasurer) -> SceneCtx<'_> {
    SceneCtx {
        fps: FPS,
        canvas: CANVAS,
        theme: resolve(Weekday::Sunday),
        font_family: "sans-serif",
        spring: DEFAULT_SPRING,
        text,
    }
}

#[test]
fn progress_is_zero_until_the_delay_passes() {
    let text = TextMeasurer::estimating();
    let c = ctx(&text);
    assert_eq!(c.progress(0, 30), 0.0);
    assert_eq!(c.progress(30, 30), 0.0);
    assert!(c.progress(31, 30) > 0.0);
}

#[test]
fn progress_saturates_at_extreme_frames() {
    let text = TextMeasurer::estimating();
    let c = ctx(&text);
    assert_eq!(c.progress(i64::MIN, 30), 0.0);
    assert_eq!(c.progress(i64::MIN, 0), 0.0);
    assert!(c.progress(i64::MAX, -1) > 0.99);
}

#[test]
fn text_height_counts_hard_breaks() {
    let text = TextMeasurer::estimating();
    let c = ctx(&text);
    let style = TextStyle::new(50.0, 600, Color::BLACK, "sans-serif");
    assert!((c.text_height(&style, "one", 500.0) - 60.0).abs() < 1e-9);
    assert!((c.text_height(&style, "one\ntwo", 500.0) - 120.0).abs() < 1e-9);
    assert!((c.text_height(&style, "", 500.0) - 60.0).abs() < 1e-9);

    let loose = style.line_height(1.4);
    assert!((c.text_height(&loose, "a\nb", 500.0) - 140.0).abs() < 1e-9);
}

#[test]
fn text_height_grows_when_a_line_wraps() {
    let text = TextMeasurer::estimating();
    let c = ctx(&text);
    let style = TextStyle::new(50.0, 700, Color::BLACK, "sans-serif");
    // Ten wide glyphs need 500px at 50px.
    let line = "一二三四五六七八九十";
    assert!((c.text_height(&style, line, 500.0) - 60.0).abs() < 1e-9);
    assert!((c.text_height(&style, line, 499.0) - 120.0).abs() < 1e-9);
}
