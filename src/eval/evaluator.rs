use std::path::Path;
use std::sync::Arc;

use crate::{
    animation::spring::{DEFAULT_SPRING, SpringConfig},
    assets::font::{DEFAULT_FONT_FAMILY, FontGate, QUIZ_FONT_FAMILY, ResolvedFont},
    assets::text::TextMeasurer,
    composition::{model::Composition, registry::CompositionId},
    foundation::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex},
    foundation::error::{QuizreelError, QuizreelResult},
    scene::{
        SceneCtx, choice::ChoiceScene, element::Element, end::EndScene,
        title_banner::QuizTitleBanner, title_options::TitleOptionsScene,
    },
    theme::daily::{Theme, ThemeChoice},
    timeline::sequence::{ActiveWindow, WindowSlot},
};

/// Inputs resolved once per render and shared read-only by every frame.
#[derive(Clone, Debug)]
pub struct RenderEnv {
    /// The render's theme.
    pub theme: &'static Theme,
    /// Family stack placed on every text element.
    pub font_family: String,
    /// Entrance spring.
    pub spring: SpringConfig,
    /// Sizes text boxes; shared by every frame and worker of the render.
    pub text: Arc<TextMeasurer>,
}

impl RenderEnv {
    /// Plain environment: the given theme, generic font, default spring, estimated text sizes.
    pub fn new(theme: &'static Theme) -> Self {
        Self {
            theme,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
            spring: DEFAULT_SPRING,
            text: Arc::new(TextMeasurer::estimating()),
        }
    }

    /// Resolve theme and font for `comp`.
    ///
    /// A theme named in the props only applies when `theme` is [`ThemeChoice::Today`].
    ///
    /// `QuizWithVideos` loads the font file at `font_path` once under [`QUIZ_FONT_FAMILY`];
    /// failures fall back to the generic family. `QuestionTemplate1` never loads a file: it uses
    /// the props `font` family when set, else the generic family.
    pub fn prepare(
        comp: &Composition,
        theme: &ThemeChoice,
        font_path: Option<&Path>,
    ) -> QuizreelResult<Self> {
        let choice = match (theme, comp) {
            (ThemeChoice::Today, Composition::QuestionTemplate1(d)) => d
                .theme
                .as_ref()
                .map(|key| ThemeChoice::Named(key.clone()))
                .unwrap_or(ThemeChoice::Today),
            _ => theme.clone(),
        };
        let theme = choice.resolve()?;

        let (font_family, font) = match comp {
            Composition::QuestionTemplate1(d) => {
                if let Some(path) = font_path {
                    tracing::debug!(path = %path.display(), "QuestionTemplate1 ignores font files");
                }
                let family = match d.font.as_deref().map(str::trim) {
                    Some(family) if !family.is_empty() => {
                        format!("{family}, {DEFAULT_FONT_FAMILY}")
                    }
                    _ => DEFAULT_FONT_FAMILY.to_owned(),
                };
                (family, ResolvedFont::fallback())
            }
            Composition::QuizWithVideos(_) => {
                let font = FontGate::load_as(font_path, QUIZ_FONT_FAMILY);
                (font.css_stack(), font)
            }
        };
        let text = TextMeasurer::for_font(&font);

        for warning in comp.diagnostics() {
            tracing::warn!(composition = %comp.id(), "{warning}");
        }
        tracing::debug!(
            theme = theme.name,
            %font_family,
            shaped = text.is_shaped(),
            "render environment ready"
        );

        Ok(Self {
            theme,
            font_family,
            spring: DEFAULT_SPRING,
            text: Arc::new(text),
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Everything visible in one frame, in painter's order.
pub struct FrameDescription {
    /// Composition id.
    pub composition: CompositionId,
    /// Absolute frame index.
    pub frame: FrameIndex,
    /// Output size.
    pub canvas: Canvas,
    /// Frame rate.
    pub fps: Fps,
    /// Canvas clear color.
    pub background: Color,
    /// Theme of the render.
    pub theme: Theme,
    /// Active timeline window, for compositions built on one.
    pub active: Option<ActiveWindow>,
    /// Elements, back to front.
    pub elements: Vec<Element>,
}

impl FrameDescription {
    /// Drop elements that cannot show up in the output: fully transparent ones and ones whose
    /// transformed bounds miss the canvas. Painter's order of the rest is kept.
    pub fn retain_visible(&mut self) {
        let canvas = self.canvas.rect();
        self.elements.retain(|e| !e.is_invisible() && e.bounds().intersect(canvas).area() > 0.0);
    }
}

/// Stateless evaluator from composition props to frame descriptions.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp, env))]
    /// Evaluate one frame.
    pub fn eval_frame(
        comp: &Composition,
        env: &RenderEnv,
        frame: FrameIndex,
    ) -> QuizreelResult<FrameDescription> {
        Self::eval_frame_impl(comp, env, frame, true)
    }

    pub(crate) fn eval_frame_unchecked(
        comp: &Composition,
        env: &RenderEnv,
        frame: FrameIndex,
    ) -> QuizreelResult<FrameDescription> {
        Self::eval_frame_impl(comp, env, frame, false)
    }

    fn eval_frame_impl(
        comp: &Composition,
        env: &RenderEnv,
        frame: FrameIndex,
        validate_comp: bool,
    ) -> QuizreelResult<FrameDescription> {
        if validate_comp {
            comp.validate()?;
        }
        let spec = comp.spec()?;
        if frame.0 >= spec.duration_frames {
            return Err(QuizreelError::evaluation(format!(
                "frame {} is out of bounds (duration {})",
                frame.0, spec.duration_frames
            )));
        }
        let f = i64::try_from(frame.0)
            .map_err(|_| QuizreelError::evaluation("frame index does not fit in i64"))?;

        let ctx = SceneCtx {
            fps: spec.fps,
            canvas: spec.canvas,
            theme: env.theme,
            font_family: &env.font_family,
            spring: env.spring,
            text: &env.text,
        };

        let (background, active, elements) = match comp {
            Composition::QuestionTemplate1(data) => (
                env.theme.background_color,
                None,
                TitleOptionsScene { data }.render(f, &ctx),
            ),
            Composition::QuizWithVideos(data) => {
                let active = data.timeline()?.active_at(frame);
                let mut elements = match active.map(|a| (a.slot, a.local_frame)) {
                    Some((WindowSlot::Choice(i), local)) => match data.choices.get(i) {
                        Some(choice) => ChoiceScene { choice }.render(local, &ctx),
                        None => {
                            return Err(QuizreelError::evaluation(format!(
                                "choice window {i} has no choice"
                            )));
                        }
                    },
                    Some((WindowSlot::End, local)) => EndScene {
                        message: &data.end_message,
                    }
                    .render(local, &ctx),
                    None => Vec::new(),
                };
                elements.extend(
                    QuizTitleBanner {
                        question: &data.question,
                        question_en: &data.question_en,
                    }
                    .render(f, &ctx),
                );
                (Color::BLACK, active, elements)
            }
        };

        Ok(FrameDescription {
            composition: comp.id(),
            frame,
            canvas: spec.canvas,
            fps: spec.fps,
            background,
            theme: *env.theme,
            active,
            elements,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
