use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aleph", version, about = "Build, play and sample timeline scenes")]
struct Cli {
    /// Scene configuration JSON (frame size, fps, seed, background).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in scenes.
    List,
    /// Play a scene and write its command stream as JSON.
    Timeline(TimelineArgs),
    /// Sample a scene at one time and write the frame state as JSON.
    Frame(FrameArgs),
    /// Print a scene's steps, duration and fingerprint.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
struct TimelineArgs {
    /// Scene name, see `aleph list`.
    #[arg(long)]
    scene: String,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Scene name, see `aleph list`.
    #[arg(long)]
    scene: String,

    /// Sample time in seconds.
    #[arg(long)]
    time: f64,

    /// Output JSON path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Scene name, see `aleph list`.
    #[arg(long)]
    scene: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = match &cli.config {
        Some(path) => aleph::SceneConfig::from_path(path)?,
        None => aleph::SceneConfig::default(),
    };

    match cli.cmd {
        Command::List => cmd_list(),
        Command::Timeline(args) => cmd_timeline(&cfg, args),
        Command::Frame(args) => cmd_frame(&cfg, args),
        Command::Inspect(args) => cmd_inspect(&cfg, args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn scene(name: &str) -> anyhow::Result<&'static aleph::SceneInfo> {
    aleph::find_scene(name).with_context(|| {
        let known: Vec<_> = aleph::catalog().iter().map(|s| s.name).collect();
        format!("unknown scene '{name}' (known: {})", known.join(", "))
    })
}

fn write_output(out: Option<&Path>, json: &str) -> anyhow::Result<()> {
    let Some(path) = out else {
        println!("{json}");
        return Ok(());
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, json).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_list() -> anyhow::Result<()> {
    for s in aleph::catalog() {
        println!("{:<12} {}", s.name, s.title);
    }
    Ok(())
}

fn cmd_timeline(cfg: &aleph::SceneConfig, args: TimelineArgs) -> anyhow::Result<()> {
    let mut timeline = scene(&args.scene)?.build(cfg)?;
    let mut log = aleph::CommandLog::new();
    timeline
        .play_into(&mut aleph::SceneGraph::new(), &mut log)
        .with_context(|| format!("play scene '{}'", args.scene))?;
    write_output(args.out.as_deref(), &log.to_json()?)
}

fn cmd_frame(cfg: &aleph::SceneConfig, args: FrameArgs) -> anyhow::Result<()> {
    let timeline = scene(&args.scene)?.build(cfg)?;
    let mut state = aleph::sample_at(&timeline, args.time)?;
    state.frame = aleph::FrameIndex((args.time * cfg.fps.as_f64()).floor() as u64);
    write_output(args.out.as_deref(), &serde_json::to_string_pretty(&state)?)
}

fn cmd_inspect(cfg: &aleph::SceneConfig, args: InspectArgs) -> anyhow::Result<()> {
    let info = scene(&args.scene)?;
    let timeline = info.build(cfg)?;
    let fp = aleph::fingerprint(&timeline)?;
    let frames = aleph::FrameSampler::new(&timeline, cfg.fps).frame_count();

    println!("scene:       {} ({})", info.name, info.title);
    println!("steps:       {}", timeline.len());
    println!("duration:    {:.3}s", timeline.duration_secs());
    println!("frames:      {frames} @ {} fps", cfg.fps.as_f64());
    println!("fingerprint: {fp}");
    for (i, step) in timeline.steps().iter().enumerate() {
        let ops: Vec<String> = step
            .ops
            .iter()
            .map(|op| match op.id() {
                Some(id) => format!("{} {id}", op.name()),
                None => op.name().to_owned(),
            })
            .collect();
        println!(
            "  [{i:>3}] t={:>7.3} run={:.2} wait={:.2}  {}",
            timeline.step_start_secs(i).unwrap_or_default(),
            step.run_time,
            step.wait,
            ops.join(", ")
        );
    }
    Ok(())
}
