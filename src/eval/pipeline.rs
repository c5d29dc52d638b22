use rayon::prelude::*;

use crate::{
    composition::model::Composition,
    eval::evaluator::{Evaluator, FrameDescription, RenderEnv},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{QuizreelError, QuizreelResult},
};

#[derive(Clone, Debug)]
/// Threading and chunking controls for multi-frame evaluation.
pub struct EvalThreading {
    /// Enable parallel evaluation when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for EvalThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Evaluate every frame of `range`, in frame order.
pub fn eval_frames(
    comp: &Composition,
    env: &RenderEnv,
    range: FrameRange,
    threading: &EvalThreading,
) -> QuizreelResult<Vec<FrameDescription>> {
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    eval_frames_into(comp, env, range, threading, |frame| {
        out.push(frame);
        Ok(())
    })?;
    Ok(out)
}

/// Evaluate `range` chunk by chunk, handing each frame to `sink` in frame order.
///
/// Only one chunk of descriptions is held in memory at a time, so long ranges can be streamed.
pub fn eval_frames_into<F>(
    comp: &Composition,
    env: &RenderEnv,
    range: FrameRange,
    threading: &EvalThreading,
    mut sink: F,
) -> QuizreelResult<()>
where
    F: FnMut(FrameDescription) -> QuizreelResult<()>,
{
    if range.is_empty() {
        return Err(QuizreelError::validation("eval range must be non-empty"));
    }
    comp.validate()?;
    let duration = comp.spec()?.duration_frames;
    if range.end.0 > duration {
        return Err(QuizreelError::validation(format!(
            "eval range end {} exceeds composition duration {duration}",
            range.end.0
        )));
    }
    env.spring.validate()?;

    if !threading.parallel {
        for f in range.frames() {
            sink(Evaluator::eval_frame_unchecked(comp, env, f)?)?;
        }
        return Ok(());
    }

    let pool = build_thread_pool(threading.threads)?;
    let chunk_size = normalized_chunk_size(threading.chunk_size);
    tracing::debug!(
        frames = range.len_frames(),
        threads = pool.current_num_threads(),
        chunk_size,
        "parallel evaluation"
    );

    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let frames: Vec<FrameIndex> = (chunk_start..chunk_end).map(FrameIndex).collect();
        let evaluated = pool.install(|| {
            frames
                .par_iter()
                .map(|f| Evaluator::eval_frame_unchecked(comp, env, *f))
                .collect::<QuizreelResult<Vec<_>>>()
        })?;
        for frame in evaluated {
            sink(frame)?;
        }
        chunk_start = chunk_end;
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> QuizreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(QuizreelError::validation(
            "eval threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| QuizreelError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/pipeline.rs"]
mod tests;
