use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use quizreel::{
    Composition, CompositionId, EvalThreading, Evaluator, FrameIndex, FrameRange, RenderEnv,
    ThemeChoice, Weekday,
};

/// Font the quiz looks for next to its props when `--font` is not given.
const QUIZ_FONT_RELATIVE: &str = "fonts/NotoSansCJKjp-Bold.otf";

#[derive(Parser, Debug)]
#[command(name = "quizreel", version)]
struct Cli {
    /// Log debug events to stderr.
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print fps, canvas, duration and the resolved theme.
    Info(PropsArgs),
    /// Print the quiz timeline windows.
    Timeline(PropsArgs),
    /// Evaluate one frame as pretty JSON.
    Frame(FrameArgs),
    /// Evaluate a frame range as JSON Lines.
    Frames(FramesArgs),
}

#[derive(Args, Debug)]
struct PropsArgs {
    /// Composition id (`QuizWithVideos`, `question-template-1`, ...).
    #[arg(long, default_value = "QuizWithVideos")]
    composition: CompositionId,

    /// Props JSON, with or without the `{"data": ...}` envelope. Sample props when omitted.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Force the weekday theme (0 = Sunday .. 6 = Saturday).
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..=6), conflicts_with = "theme")]
    day: Option<i64>,

    /// Force a theme by weekday key or palette name.
    #[arg(long)]
    theme: Option<String>,

    /// Custom font file.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    props: PropsArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Drop transparent and off-canvas elements.
    #[arg(long, default_value_t = false)]
    visible_only: bool,
}

#[derive(Args, Debug)]
struct FramesArgs {
    #[command(flatten)]
    props: PropsArgs,

    /// Output JSON Lines path.
    #[arg(long)]
    out: PathBuf,

    /// First frame (inclusive).
    #[arg(long, default_value_t = 0)]
    start: u64,

    /// Last frame (exclusive); the composition duration when omitted.
    #[arg(long)]
    end: Option<u64>,

    /// Enable frame-level parallelism.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,

    /// Evaluation chunk size (parallel mode only).
    #[arg(long, default_value_t = 64)]
    chunk_size: usize,

    /// Drop transparent and off-canvas elements.
    #[arg(long, default_value_t = false)]
    visible_only: bool,
}

impl PropsArgs {
    fn composition(&self) -> anyhow::Result<Composition> {
        match &self.in_path {
            Some(path) => Ok(Composition::from_path(self.composition, path)?),
            None => Ok(Composition::sample(self.composition)),
        }
    }

    fn theme_choice(&self) -> ThemeChoice {
        match (&self.theme, self.day) {
            (Some(key), _) => ThemeChoice::Named(key.clone()),
            (None, Some(day)) => ThemeChoice::Day(Weekday::from_index(day)),
            (None, None) => ThemeChoice::Today,
        }
    }

    fn font_path(&self) -> Option<PathBuf> {
        if let Some(font) = &self.font {
            return Some(font.clone());
        }
        if self.composition != CompositionId::QuizWithVideos {
            return None;
        }
        let dir = self
            .in_path
            .as_deref()?
            .parent()
            .unwrap_or_else(|| Path::new("."));
        Some(dir.join(QUIZ_FONT_RELATIVE))
    }

    fn load(&self) -> anyhow::Result<(Composition, RenderEnv)> {
        let comp = self.composition()?;
        let env = RenderEnv::prepare(&comp, &self.theme_choice(), self.font_path().as_deref())?;
        Ok((comp, env))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    match cli.cmd {
        Command::Info(args) => cmd_info(args),
        Command::Timeline(args) => cmd_timeline(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
    }
}

fn cmd_info(args: PropsArgs) -> anyhow::Result<()> {
    let (comp, env) = args.load()?;
    let spec = comp.spec()?;
    let info = serde_json::json!({
        "composition": spec.id,
        "fps": spec.fps,
        "canvas": spec.canvas,
        "durationFrames": spec.duration_frames,
        "durationSecs": spec.duration_secs(),
        "theme": env.theme,
        "fontFamily": env.font_family,
        "diagnostics": comp.diagnostics(),
    });
    write_stdout_json(&info)
}

fn cmd_timeline(args: PropsArgs) -> anyhow::Result<()> {
    let comp = args.composition()?;
    let Composition::QuizWithVideos(data) = &comp else {
        anyhow::bail!("{} has no scene timeline", comp.id());
    };
    let timeline = data.timeline()?;
    let windows: Vec<_> = timeline
        .windows()
        .map(|(slot, w)| {
            let range = w.range();
            serde_json::json!({ "slot": slot, "start": range.start, "end": range.end })
        })
        .collect();
    write_stdout_json(&serde_json::json!({
        "totalFrames": timeline.total_duration(),
        "windows": windows,
    }))
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (comp, env) = args.props.load()?;
    let mut desc = Evaluator::eval_frame(&comp, &env, FrameIndex(args.frame))?;
    if args.visible_only {
        desc.retain_visible();
    }

    match args.out {
        Some(out) => {
            let f = create_output(&out)?;
            serde_json::to_writer_pretty(std::io::BufWriter::new(f), &desc)
                .with_context(|| format!("write frame json '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
            Ok(())
        }
        None => write_stdout_json(&desc),
    }
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    let (comp, env) = args.props.load()?;
    let end = match args.end {
        Some(end) => end,
        None => comp.spec()?.duration_frames,
    };
    let range = FrameRange::new(FrameIndex(args.start), FrameIndex(end))?;
    let threading = EvalThreading {
        parallel: args.parallel,
        chunk_size: args.chunk_size,
        threads: args.threads,
    };

    let f = create_output(&args.out)?;
    let mut w = std::io::BufWriter::new(f);
    quizreel::eval_frames_into(&comp, &env, range, &threading, |mut desc| {
        if args.visible_only {
            desc.retain_visible();
        }
        serde_json::to_writer(&mut w, &desc)?;
        w.write_all(b"\n")
            .context("write frame line")
            .map_err(quizreel::QuizreelError::from)
    })?;
    w.flush()
        .with_context(|| format!("flush '{}'", args.out.display()))?;

    eprintln!("wrote {} frames to {}", range.len_frames(), args.out.display());
    Ok(())
}

fn create_output(path: &Path) -> anyhow::Result<std::fs::File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::File::create(path).with_context(|| format!("create '{}'", path.display()))
}

fn write_stdout_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    serde_json::to_writer_pretty(&mut lock, value).context("write json to stdout")?;
    lock.write_all(b"\n").context("write json to stdout")?;
    Ok(())
}
