use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use anyhow::Context as _;

use crate::composition::registry::{CompositionId, CompositionSpec, END_DURATION, SCENE_DURATION};
use crate::foundation::error::{QuizreelError, QuizreelResult};
use crate::scene::glyphs::option_letter;
use crate::timeline::sequence::Timeline;

/// Props of the title + options template.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionData {
    /// Caller-side identifier; not rendered.
    #[serde(default)]
    pub id: String,
    /// Question headline.
    pub question: String,
    /// Answer options in display order.
    #[serde(default)]
    pub options: Vec<String>,
    /// Theme override: weekday key or palette name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Font family override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl QuestionData {
    /// Preview props.
    pub fn sample() -> Self {
        Self {
            id: "test-1".to_owned(),
            question: "あなたはどっち派？".to_owned(),
            options: vec!["朝型人間".to_owned(), "夜型人間".to_owned()],
            theme: None,
            font: None,
        }
    }
}

/// One quiz choice, shown over its own video backdrop.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// 1-based ordinal; selects the circled-digit glyph.
    pub number: i64,
    /// Primary caption.
    pub text: String,
    /// Translated caption.
    #[serde(default)]
    pub text_en: String,
    /// Path of the externally produced backdrop video.
    #[serde(default)]
    pub video_path: String,
}

/// Props of the multi-choice quiz with video backdrops.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizData {
    /// Question shown in the persistent title banner.
    pub question: String,
    /// Translated question.
    #[serde(default)]
    pub question_en: String,
    /// Choices, one timeline window each.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Closing message.
    #[serde(default)]
    pub end_message: String,
    /// Translated closing message.
    #[serde(default)]
    pub end_message_en: String,
}

impl QuizData {
    /// Timeline with one [`SCENE_DURATION`] window per choice and an [`END_DURATION`] end window.
    pub fn timeline(&self) -> QuizreelResult<Timeline> {
        Timeline::new(self.choices.len(), SCENE_DURATION, END_DURATION)
    }

    /// Preview props: four choices, 1050 frames.
    pub fn sample() -> Self {
        let choice = |number, text: &str, text_en: &str, video_path: &str| Choice {
            number,
            text: text.to_owned(),
            text_en: text_en.to_owned(),
            video_path: video_path.to_owned(),
        };
        Self {
            question: "一週間過ごすなら？".to_owned(),
            question_en: "Where would you spend a week?".to_owned(),
            choices: vec![
                choice(1, "溶岩の中", "In the lava", "videos/lava.mp4"),
                choice(2, "氷の部屋", "Ice room", "videos/ice.mp4"),
                choice(3, "宇宙空間", "Outer space", "videos/space.mp4"),
                choice(4, "水中都市", "Underwater city", "videos/underwater.mp4"),
            ],
            end_message: "あなたはどこに住みたいと思いましたか？\n感想はコメント欄へ！".to_owned(),
            end_message_en: "Where would you like to live?\nComment below!".to_owned(),
        }
    }
}

/// The `{"data": ...}` wrapper props arrive in.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PropsEnvelope<T> {
    /// Wrapped props.
    pub data: T,
}

/// A composition id paired with its props.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "composition", content = "data")]
pub enum Composition {
    /// Title + lettered options.
    QuestionTemplate1(QuestionData),
    /// Multi-choice quiz with video backdrops.
    QuizWithVideos(QuizData),
}

impl Composition {
    /// Which composition this is.
    pub fn id(&self) -> CompositionId {
        match self {
            Self::QuestionTemplate1(_) => CompositionId::QuestionTemplate1,
            Self::QuizWithVideos(_) => CompositionId::QuizWithVideos,
        }
    }

    /// Frame rate, canvas and duration.
    pub fn spec(&self) -> QuizreelResult<CompositionSpec> {
        match self {
            Self::QuestionTemplate1(_) => Ok(CompositionSpec::question_template_1()),
            Self::QuizWithVideos(data) => CompositionSpec::quiz_with_videos(data.choices.len()),
        }
    }

    /// Preview composition with sample props.
    pub fn sample(id: CompositionId) -> Self {
        match id {
            CompositionId::QuestionTemplate1 => Self::QuestionTemplate1(QuestionData::sample()),
            CompositionId::QuizWithVideos => Self::QuizWithVideos(QuizData::sample()),
        }
    }

    /// Parse props for `id` from JSON, with or without the `{"data": ...}` envelope.
    pub fn from_value(id: CompositionId, mut value: serde_json::Value) -> QuizreelResult<Self> {
        if let Some(inner) = value.as_object_mut().and_then(|o| o.remove("data")) {
            value = inner;
        }
        let comp = match id {
            CompositionId::QuestionTemplate1 => {
                Self::QuestionTemplate1(serde_json::from_value(value)?)
            }
            CompositionId::QuizWithVideos => Self::QuizWithVideos(serde_json::from_value(value)?),
        };
        comp.validate()?;
        Ok(comp)
    }

    /// Parse props from a reader.
    pub fn from_reader<R: Read>(id: CompositionId, reader: R) -> QuizreelResult<Self> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        Self::from_value(id, value)
    }

    /// Parse props from a JSON file.
    pub fn from_path(id: CompositionId, path: &Path) -> QuizreelResult<Self> {
        let f = std::fs::File::open(path)
            .with_context(|| format!("open props '{}'", path.display()))?;
        Self::from_reader(id, std::io::BufReader::new(f))
    }

    /// Reject props that cannot produce a meaningful composition.
    pub fn validate(&self) -> QuizreelResult<()> {
        let question = match self {
            Self::QuestionTemplate1(d) => &d.question,
            Self::QuizWithVideos(d) => &d.question,
        };
        if question.trim().is_empty() {
            return Err(QuizreelError::validation("question must not be empty"));
        }
        self.spec().map(|_| ())
    }

    /// Out-of-contract input that still renders, in a degraded form.
    pub fn diagnostics(&self) -> Vec<String> {
        let mut out = Vec::new();
        match self {
            Self::QuestionTemplate1(d) => {
                if d.options.is_empty() {
                    out.push("no options; only the title will render".to_owned());
                }
                for (i, opt) in d.options.iter().enumerate() {
                    if option_letter(i).is_none() {
                        out.push(format!(
                            "option {i} (\"{opt}\") has no letter label; it renders unlabeled"
                        ));
                    }
                }
            }
            Self::QuizWithVideos(d) => {
                if d.choices.is_empty() {
                    out.push("no choices; the timeline is the end scene only".to_owned());
                }
                let mut seen = BTreeSet::new();
                for c in &d.choices {
                    if !(1..=9).contains(&c.number) {
                        out.push(format!(
                            "choice ordinal {} has no circled glyph; the numeral is shown",
                            c.number
                        ));
                    }
                    if !seen.insert(c.number) {
                        out.push(format!("choice ordinal {} is used more than once", c.number));
                    }
                    if c.video_path.is_empty() {
                        out.push(format!("choice {} has no video path", c.number));
                    }
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/model.rs"]
mod tests;
