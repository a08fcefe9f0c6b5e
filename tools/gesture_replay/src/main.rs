mod replay;
mod trace;

use std::{path::PathBuf, process};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use letter_gestures::active_config;

use replay::replay;
use trace::{parse_expected_letters, parse_trace};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "gesture_replay")]
#[command(about = "Replay a recorded pointer trace through the letter gesture tracker")]
struct Cli {
    /// CSV trace with `pointer`, `forward` and `enable` lines.
    trace: PathBuf,
    /// File listing the letters the trace must produce, one per line.
    #[arg(long)]
    expect: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,
    /// Display density in pixels per dp.
    #[arg(long, default_value_t = 1.0)]
    density: f32,
    /// Log tracker decisions (same as RUST_LOG=debug).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("error: {err:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let lines = parse_trace(&cli.trace)?;
    let metrics = active_config().metrics(cli.density);
    log::debug!(
        "replay: {} lines from {} threshold={}px",
        lines.len(),
        cli.trace.display(),
        metrics.drag_threshold_px
    );

    let report = replay(&lines, metrics);
    match cli.format {
        OutputFormat::Csv => report.print_csv(),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(expect_path) = cli.expect {
        let expected: Vec<char> = parse_expected_letters(&expect_path)?
            .into_iter()
            .map(|letter| letter.as_char())
            .collect();
        let actual = report.recognized();
        if actual != expected {
            eprintln!("expected letters: {}", expected.iter().collect::<String>());
            eprintln!("actual letters:   {}", actual.iter().collect::<String>());
            bail!("letter sequence mismatch");
        }
    }

    Ok(())
}
