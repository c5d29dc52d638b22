use std::fmt;
use std::str::FromStr;

use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{QuizreelError, QuizreelResult};
use crate::timeline::sequence::Timeline;

/// Frame rate shared by every composition.
pub const FPS: Fps = Fps { num: 30, den: 1 };
/// Vertical 1080x1920 canvas shared by every composition.
pub const CANVAS: Canvas = Canvas {
    width: 1080,
    height: 1920,
};
/// Fixed length of `QuestionTemplate1`.
pub const QUESTION_TEMPLATE_DURATION: u64 = 150;
/// Length of each choice window in `QuizWithVideos` (8 s).
pub const SCENE_DURATION: u64 = 240;
/// Length of the end window in `QuizWithVideos` (3 s).
pub const END_DURATION: u64 = 90;

/// Registered compositions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum CompositionId {
    /// Title + lettered options, 150 frames.
    QuestionTemplate1,
    /// Multi-choice quiz with video backdrops, `choices * 240 + 90` frames.
    QuizWithVideos,
}

impl CompositionId {
    /// All registered ids.
    pub const ALL: [Self; 2] = [Self::QuestionTemplate1, Self::QuizWithVideos];

    /// Canonical id string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::QuestionTemplate1 => "QuestionTemplate1",
            Self::QuizWithVideos => "QuizWithVideos",
        }
    }
}

impl fmt::Display for CompositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompositionId {
    type Err = QuizreelError;

    /// Accepts the canonical id or its kebab-case form (`quiz-with-videos`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().to_ascii_lowercase() == norm)
            .ok_or_else(|| QuizreelError::validation(format!("unknown composition \"{s}\"")))
    }
}

/// Fixed output parameters of one composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CompositionSpec {
    /// Composition id.
    pub id: CompositionId,
    /// Frame rate.
    pub fps: Fps,
    /// Output size.
    pub canvas: Canvas,
    /// Total length in frames.
    pub duration_frames: u64,
}

impl CompositionSpec {
    /// `QuestionTemplate1`: 150 frames.
    pub fn question_template_1() -> Self {
        Self {
            id: CompositionId::QuestionTemplate1,
            fps: FPS,
            canvas: CANVAS,
            duration_frames: QUESTION_TEMPLATE_DURATION,
        }
    }

    /// `QuizWithVideos` with `choice_count` choices.
    pub fn quiz_with_videos(choice_count: usize) -> QuizreelResult<Self> {
        let timeline = Timeline::new(choice_count, SCENE_DURATION, END_DURATION)?;
        Ok(Self {
            id: CompositionId::QuizWithVideos,
            fps: FPS,
            canvas: CANVAS,
            duration_frames: timeline.total_duration(),
        })
    }

    /// `[0, duration)`.
    pub fn frame_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.duration_frames),
        }
    }

    /// Duration in seconds.
    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration_frames as i64)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/registry.rs"]
mod tests;
