use super::*;
use crate::animation::spring::DEFAULT_SPRING;
use crate::assets::text::TextMeasurer;
use crate::composition::registry::{CANVAS, FPS};
use crate::scene::element::ElementKind;
use crate::theme::daily::{Weekday, resolve};

fn ctx(text: &TextMeasurer) -> SceneCtx<'_> {
    SceneCtx {
        fps: FPS,
        canvas: CANVAS,
        theme: resolve(Weekday::Saturday),
        font_family: "sans-serif",
        spring: DEFAULT_SPRING,
        text,
    }
}

fn banner() -> QuizTitleBanner<'static> {
    QuizTitleBanner {
        question: "一週間過ごすなら？",
        question_en: "Where would you spend a week?",
    }
}

#[test]
fn fades_in_on_absolute_frame() {
    let text = TextMeasurer::estimating();
    let first = banner().render(0, &ctx(&text));
    assert!(first.iter().all(|e| e.opacity == 0.0));

    let later = banner().render(500, &ctx(&text));
    assert!(later[0].opacity > 0.999);
    assert!((later[2].opacity - later[0].opacity * 0.9).abs() < 1e-12);
}

#[test]
fn panel_geometry() {
    let text = TextMeasurer::estimating();
    let els = banner().render(100, &ctx(&text));
    let panel = &els[0];
    assert_eq!(panel.id, "title-banner");
    assert!((panel.frame.y0 - 1920.0 * 0.08).abs() < 1e-9);
    assert!((panel.frame.width() - 972.0).abs() < 1e-9);
    assert!((panel.frame.center().x - 540.0).abs() < 1e-9);
    // 20 + 108 + 8 + 57.6 + 20
    assert!((panel.frame.height() - 213.6).abs() < 1e-9);

    assert!(els[1].frame.y1 <= els[2].frame.y0);
    assert!((els[2].frame.y1 - (panel.frame.y1 - 20.0)).abs() < 1e-9);
}

#[test]
fn long_question_wraps_and_grows_panel() {
    let text = TextMeasurer::estimating();
    let els = QuizTitleBanner {
        question: "この夏、家族みんなで一週間過ごすならどこがいいですか？",
        question_en: "Where would you spend a week?",
    }
    .render(100, &ctx(&text));
    // 27 wide glyphs at 90px inside 902px: three lines of 108
    assert!((els[1].frame.height() - 324.0).abs() < 1e-9);
    assert!((els[0].frame.height() - (213.6 + 216.0)).abs() < 1e-9);
}

#[test]
fn panel_uses_theme_primary() {
    let text = TextMeasurer::estimating();
    let els = banner().render(100, &ctx(&text));
    match &els[0].kind {
        ElementKind::Block { fill, corner_radius } => {
            assert_eq!(*fill, ctx(&text).theme.primary_color);
            assert_eq!(*corner_radius, 15.0);
        }
        other => panic!("unexpected kind {other:?}"),
    }
}
