use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{QuizreelError, QuizreelResult};

/// A contiguous half-open window of the composition timeline in which one scene is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct TimelineWindow {
    /// First absolute frame of the window.
    pub start: u64,
    /// Window length in frames.
    pub length: u64,
}

impl TimelineWindow {
    /// One past the last frame of the window.
    pub fn end(self) -> u64 {
        self.start.saturating_add(self.length)
    }

    /// True when `frame` lies in `[start, start + length)`.
    pub fn contains(self, frame: i64) -> bool {
        frame >= 0 && (frame as u64) >= self.start && (frame as u64) < self.end()
    }

    /// Window-local frame: `frame - start`, saturating. Negative before the window opens.
    pub fn relative_frame(self, frame: i64) -> i64 {
        frame.saturating_sub(i64::try_from(self.start).unwrap_or(i64::MAX))
    }

    /// The window as a [`FrameRange`].
    pub fn range(self) -> FrameRange {
        FrameRange::with_len(self.start, self.length)
    }
}

/// Which scene a window belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum WindowSlot {
    /// Scene for the choice at this 0-based position.
    Choice(usize),
    /// Trailing end-message scene.
    End,
}

/// Result of locating an absolute frame on the timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActiveWindow {
    /// Scene owning the window.
    pub slot: WindowSlot,
    /// The window itself.
    pub window: TimelineWindow,
    /// Frame re-based to the window start (always `>= 0`).
    pub local_frame: i64,
}

/// Fixed-length scene windows for `choice_count` choices followed by one end window.
///
/// Choice window `i` covers `[i * scene_duration, (i + 1) * scene_duration)`; the end window
/// starts at `choice_count * scene_duration` and lasts `end_duration` frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Timeline {
    choice_count: usize,
    scene_duration: u64,
    end_duration: u64,
}

impl Timeline {
    /// Build a timeline. Both durations must be at least one frame.
    pub fn new(
        choice_count: usize,
        scene_duration: u64,
        end_duration: u64,
    ) -> QuizreelResult<Self> {
        if scene_duration == 0 {
            return Err(QuizreelError::timeline("scene duration must be > 0"));
        }
        if end_duration == 0 {
            return Err(QuizreelError::timeline("end duration must be > 0"));
        }
        (choice_count as u64)
            .checked_mul(scene_duration)
            .and_then(|v| v.checked_add(end_duration))
            .filter(|v| *v <= i64::MAX as u64)
            .ok_or_else(|| QuizreelError::timeline("timeline duration overflows"))?;

        tracing::debug!(
            choice_count,
            scene_duration,
            end_duration,
            "built scene timeline"
        );
        Ok(Self {
            choice_count,
            scene_duration,
            end_duration,
        })
    }

    /// Number of choice windows.
    pub fn choice_count(&self) -> usize {
        self.choice_count
    }

    /// Length of every choice window.
    pub fn scene_duration(&self) -> u64 {
        self.scene_duration
    }

    /// Length of the end window.
    pub fn end_duration(&self) -> u64 {
        self.end_duration
    }

    /// `choice_count * scene_duration + end_duration`.
    pub fn total_duration(&self) -> u64 {
        self.end_start() + self.end_duration
    }

    fn end_start(&self) -> u64 {
        self.choice_count as u64 * self.scene_duration
    }

    /// Window of the choice at 0-based `index`, if it exists.
    pub fn choice_window(&self, index: usize) -> Option<TimelineWindow> {
        (index < self.choice_count).then(|| TimelineWindow {
            start: index as u64 * self.scene_duration,
            length: self.scene_duration,
        })
    }

    /// The trailing end window.
    pub fn end_window(&self) -> TimelineWindow {
        TimelineWindow {
            start: self.end_start(),
            length: self.end_duration,
        }
    }

    /// All windows in timeline order, end window last.
    pub fn windows(&self) -> impl Iterator<Item = (WindowSlot, TimelineWindow)> + '_ {
        (0..self.choice_count)
            .filter_map(|i| self.choice_window(i).map(|w| (WindowSlot::Choice(i), w)))
            .chain(std::iter::once((WindowSlot::End, self.end_window())))
    }

    /// Locate `frame`; `None` before frame 0 or at/after [`Self::total_duration`].
    pub fn active_window(&self, frame: i64) -> Option<ActiveWindow> {
        if frame < 0 || frame as u64 >= self.total_duration() {
            return None;
        }
        let f = frame as u64;
        let (slot, window) = if f < self.end_start() {
            let i = (f / self.scene_duration) as usize;
            (WindowSlot::Choice(i), self.choice_window(i)?)
        } else {
            (WindowSlot::End, self.end_window())
        };
        Some(ActiveWindow {
            slot,
            window,
            local_frame: window.relative_frame(frame),
        })
    }

    /// Convenience wrapper over [`Self::active_window`] for absolute frame indices.
    pub fn active_at(&self, frame: FrameIndex) -> Option<ActiveWindow> {
        i64::try_from(frame.0)
            .ok()
            .and_then(|f| self.active_window(f))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/sequence.rs"]
mod tests;
