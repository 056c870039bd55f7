use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "promptween", version)]
struct Cli {
    /// Log debug detail about each pass (warnings are always shown).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Expand a keyframe prompt document into one prompt per frame.
    Interpolate(InterpolateArgs),
    /// Run the built-in keyframe scenarios and print every frame.
    Demo,
}

#[derive(Args, Debug)]
struct InterpolateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Number of frames to emit (indices `0..frames`).
    #[arg(long)]
    frames: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct InputArgs {
    /// Keyframe JSON file (`{"<frame>": "<prompt>"}`).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Keyframe JSON given inline.
    #[arg(long)]
    prompts: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// `frame <i>:<TAB><prompt>` per line.
    Text,
    /// `{"frames": [...], "warnings": [...]}`.
    Json,
}

// Keyframe documents and frame counts exercised by `promptween demo`.
const DEMO_SCENARIOS: &[(&str, u64)] = &[
    (r#"{ "0": "rocket", "10": "cat" }"#, 10),
    (r#"{ "0": "rocket", "10": "cat --neg hat" }"#, 10),
    (r#"{ "0": "rocket --neg moon", "10": "cat" }"#, 10),
    (r#"{ "0": "rocket --neg moon", "10": "cat --neg hat" }"#, 10),
    (r#"{ "0": "--neg moon", "10": "cat" }"#, 10),
    (r#"{ "0": "a", "10": "--neg hat" }"#, 10),
    (r#"{ "0": "--neg moon", "10": "--neg hat" }"#, 10),
    (r#"{ "0": "rocket", "10": "cat" }"#, 12),
    (r#"{ "0": "rocket", "10": "cat" }"#, 5),
    (r#"{ "1": "rocket", "1": "cat" }"#, 10),
    (r#"{ "10": "cat", "0": "rocket" }"#, 10),
    (r#"{ "0": "a AND a2", "10": "b" }"#, 10),
    (r#"{ "0": "a", "10": "b AND b2" }"#, 10),
    (r#"{ "0": "rocket", "10": "cat", "5": "zebra" }"#, 10),
];

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Interpolate(args) => cmd_interpolate(args),
        Command::Demo => cmd_demo(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_keyframes(input: &InputArgs) -> anyhow::Result<promptween::Keyframes> {
    if let Some(json) = &input.prompts {
        return promptween::Keyframes::from_json_str(json).context("parse inline keyframes");
    }
    let path = input
        .in_path
        .as_deref()
        .context("either --in or --prompts is required")?;
    let f = File::open(path).with_context(|| format!("open keyframes '{}'", path.display()))?;
    promptween::Keyframes::from_json_reader(BufReader::new(f))
        .with_context(|| format!("parse keyframes '{}'", path.display()))
}

fn open_output(out: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    let Some(path) = out else {
        return Ok(Box::new(BufWriter::new(std::io::stdout().lock())));
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create output '{}'", path.display()))?;
    Ok(Box::new(BufWriter::new(f)))
}

fn write_frames(w: &mut dyn Write, frames: &[String]) -> std::io::Result<()> {
    for (i, p) in frames.iter().enumerate() {
        writeln!(w, "frame {i}:\t{p}")?;
    }
    Ok(())
}

fn cmd_interpolate(args: InterpolateArgs) -> anyhow::Result<()> {
    let keyframes = read_keyframes(&args.input)?;
    let result = promptween::interpolate_prompts(&keyframes, args.frames)?;

    let mut w = open_output(args.out.as_deref())?;
    match args.format {
        OutputFormat::Text => write_frames(w.as_mut(), &result.frames)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut w, &result).context("write JSON output")?;
            writeln!(w)?;
        }
    }
    w.flush().context("flush output")?;

    if let Some(out) = &args.out {
        eprintln!("wrote {}", out.display());
    }
    Ok(())
}

fn cmd_demo() -> anyhow::Result<()> {
    let mut w = open_output(None)?;
    for (json, frames) in DEMO_SCENARIOS {
        writeln!(w, "Testing  {json}  with {frames} frames")?;
        let result = promptween::interpolate_json(json, *frames)
            .with_context(|| format!("interpolate demo scenario {json}"))?;
        write_frames(w.as_mut(), &result.frames)?;
    }
    w.flush().context("flush output")?;
    Ok(())
}
