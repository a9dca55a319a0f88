use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "easel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the text report of a scene.
    Text(TextArgs),
    /// Export a scene as an SVG document.
    Svg(SvgArgs),
    /// Print the state of every shape at one frame as JSON.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct TextArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SvgArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback speed in frames per second.
    #[arg(long, default_value_t = 1.0)]
    speed: f64,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frame to evaluate.
    #[arg(long)]
    frame: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Text(args) => cmd_text(args),
        Command::Svg(args) => cmd_svg(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn read_canvas(path: &Path) -> anyhow::Result<easel::Canvas> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("read scene '{}'", path.display()))?;
    let canvas = easel::Canvas::from_json_str(&s)
        .with_context(|| format!("load scene '{}'", path.display()))?;
    Ok(canvas)
}

fn emit(out: Option<&Path>, body: &str) -> anyhow::Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, body).with_context(|| format!("write '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => std::io::stdout()
            .lock()
            .write_all(body.as_bytes())
            .context("write stdout")?,
    }
    Ok(())
}

fn cmd_text(args: TextArgs) -> anyhow::Result<()> {
    let canvas = read_canvas(&args.in_path)?;
    emit(args.out.as_deref(), &canvas.to_string())
}

fn cmd_svg(args: SvgArgs) -> anyhow::Result<()> {
    if !(args.speed.is_finite() && args.speed > 0.0) {
        anyhow::bail!("--speed must be > 0, got {}", args.speed);
    }
    let canvas = read_canvas(&args.in_path)?;
    let svg = canvas.to_svg_string(1000.0 / args.speed)?;
    emit(args.out.as_deref(), &svg)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let canvas = read_canvas(&args.in_path)?;
    let snapshots = canvas.snapshots_at_frame(args.frame)?;
    let mut json = serde_json::to_string_pretty(&snapshots).context("encode snapshots")?;
    json.push('\n');
    emit(None, &json)
}
