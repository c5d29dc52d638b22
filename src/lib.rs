//! quizreel turns declarative quiz props into per-frame scene descriptions for short vertical
//! videos.
//!
//! Every frame is a pure function of `(composition props, frame index)`: the crate computes which
//! scene is active, how far its spring animations have progressed, and where each element sits,
//! then hands a serializable [`FrameDescription`] to whatever rasterizer consumes it.
//!
//! # Pipeline overview
//!
//! 1. **Theme**: pick one [`Theme`] for the whole render (by weekday or by name).
//! 2. **Timeline**: `absolute frame -> (active window, window-local frame)` via [`Timeline`].
//! 3. **Scenes**: each scene renderer samples [`spring`] curves at its local frame and emits
//!    [`Element`]s.
//! 4. **Evaluate**: [`Evaluator::eval_frame`] assembles the final [`FrameDescription`];
//!    [`eval_frames`] evaluates whole ranges, optionally in parallel.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: the only impure inputs (today's weekday, the font file and the faces text
//!   is measured with) are resolved once, before evaluation, into a [`RenderEnv`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod composition;
mod eval;
mod foundation;
mod scene;
mod theme;
mod timeline;

pub use animation::interpolate::remap;
pub use animation::spring::{DEFAULT_SPRING, SpringConfig, spring};
pub use assets::font::{DEFAULT_FONT_FAMILY, FontGate, FontSource, QUIZ_FONT_FAMILY, ResolvedFont};
pub use assets::text::TextMeasurer;
pub use composition::model::{Choice, Composition, PropsEnvelope, QuestionData, QuizData};
pub use composition::registry::{
    CANVAS, CompositionId, CompositionSpec, END_DURATION, FPS, QUESTION_TEMPLATE_DURATION,
    SCENE_DURATION,
};
pub use eval::evaluator::{Evaluator, FrameDescription, RenderEnv};
pub use eval::pipeline::{EvalThreading, eval_frames, eval_frames_into};
pub use foundation::color::Color;
pub use foundation::core::{Canvas, Fps, FrameIndex, FrameRange, Point, Rect, Size, Vec2};
pub use foundation::error::{QuizreelError, QuizreelResult};
pub use scene::choice::ChoiceScene;
pub use scene::element::{Element, ElementKind, TextAlign};
pub use scene::end::EndScene;
pub use scene::glyphs::{circled_ordinal, option_letter};
pub use scene::title_banner::QuizTitleBanner;
pub use scene::title_options::TitleOptionsScene;
pub use scene::SceneCtx;
pub use theme::daily::{THEMES, Theme, ThemeChoice, Weekday, resolve};
pub use timeline::sequence::{ActiveWindow, Timeline, TimelineWindow, WindowSlot};
