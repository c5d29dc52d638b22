use super::*;
use crate::animation::spring::DEFAULT_SPRING;
use crate::assets::text::TextMeasurer;
use crate::composition::model::QuizData;
use crate::composition::registry::{CANVAS, FPS};
use crate::scene::element::ElementKind;
use crate::theme::daily::{Weekday, resolve};

fn ctx(text: &TextMeasurer) -> SceneCtx<'_> {
    SceneCtx {
        fps: FPS,
        canvas: CANVAS,
        theme: resolve(Weekday::Wednesday),
        font_family: "sans-serif",
        spring: DEFAULT_SPRING,
        text,
    }
}

fn find<'a>(els: &'a [Element], id: &str) -> &'a Element {
    els.iter().find(|e| e.id == id).unwrap()
}

#[test]
fn lays_out_backdrop_and_caption() {
    let text = TextMeasurer::estimating();
    let quiz = QuizData::sample();
    let els = ChoiceScene {
        choice: &quiz.choices[2],
    }
    .render(0, &ctx(&text));
    let ids: Vec<&str> = els.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "choice-background",
            "choice-video",
            "choice-video-label",
            "choice-caption",
            "choice-caption-en",
        ]
    );

    let video = find(&els, "choice-video");
    assert_eq!(video.frame.width(), 1080.0);
    assert!((video.frame.height() - 607.5).abs() < 1e-9);
    match &video.kind {
        ElementKind::VideoPlaceholder { asset_path, fill } => {
            assert_eq!(asset_path, "videos/space.mp4");
            assert_eq!(*fill, ctx(&text).theme.background_color);
        }
        other => panic!("unexpected kind {other:?}"),
    }

    let en = find(&els, "choice-caption-en");
    assert!((en.frame.y1 - 1920.0 * 0.95).abs() < 1e-9);
    assert!(find(&els, "choice-caption").frame.y1 < en.frame.y0);
}

#[test]
fn caption_uses_circled_ordinal() {
    let text = TextMeasurer::estimating();
    let quiz = QuizData::sample();
    let els = ChoiceScene {
        choice: &quiz.choices[0],
    }
    .render(60, &ctx(&text));
    match &find(&els, "choice-caption").kind {
        ElementKind::Text { content, .. } => assert_eq!(content, "① 溶岩の中"),
        other => panic!("unexpected kind {other:?}"),
    }
    match &find(&els, "choice-caption-en").kind {
        ElementKind::Text { content, .. } => assert_eq!(content, "① In the lava"),
        other => panic!("unexpected kind {other:?}"),
    }
}

#[test]
fn caption_rises_after_delay() {
    let text = TextMeasurer::estimating();
    let quiz = QuizData::sample();
    let scene = ChoiceScene {
        choice: &quiz.choices[0],
    };

    let early = scene.render(CAPTION_DELAY, &ctx(&text));
    let caption = find(&early, "choice-caption");
    assert_eq!(caption.translate.y, 50.0);
    assert_eq!(caption.opacity, 0.0);

    let late = scene.render(239, &ctx(&text));
    let caption = find(&late, "choice-caption");
    assert!(caption.translate.y.abs() < 0.1);
    assert!(caption.opacity > 0.99);
    let en = find(&late, "choice-caption-en");
    assert!((en.opacity - caption.opacity * 0.9).abs() < 1e-12);
}

#[test]
fn backdrop_is_static() {
    let text = TextMeasurer::estimating();
    let quiz = QuizData::sample();
    let scene = ChoiceScene {
        choice: &quiz.choices[1],
    };
    let a = scene.render(0, &ctx(&text));
    let b = scene.render(200, &ctx(&text));
    assert_eq!(find(&a, "choice-video"), find(&b, "choice-video"));
    assert_eq!(find(&a, "choice-video-label"), find(&b, "choice-video-label"));
}
