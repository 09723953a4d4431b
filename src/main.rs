//! Bernoulli number generator CLI.
//!
//! Computes the first `count` even Bernoulli numbers as exact fractions,
//! optionally checkpointing progress to disk so a long run can be resumed.

use bignum_bernoulli::bernoulli::BernState;
use bignum_bernoulli::formatter::{self, RunSummary};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

/// Arbitrary-precision rational Bernoulli number generator.
#[derive(Parser, Debug)]
#[command(name = "bernoulli-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// How many even Bernoulli numbers to compute (B2 .. B(2*count)).
    count: usize,

    /// Output table format.
    #[arg(short, long, default_value = "none")]
    format: OutputFormat,

    /// Write the formatted table here instead of standard output.
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Checkpoint file path. If it already exists, resume from it.
    #[arg(long)]
    checkpoint: Option<PathBuf>,

    /// Minimum interval, in seconds, between checkpoint publishes.
    #[arg(long, default_value = "30")]
    checkpoint_interval: u64,

    /// Verbose logging (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print a JSON run summary to standard error on completion.
    #[arg(long)]
    json_summary: bool,
}

/// Table output format, mirroring the reference harness's `format` enum
/// (spec §6: `0: none, 1: csv-tab, 2: csv-comma, 3: csv-semicolon, 4: source`).
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// No table output.
    None,
    /// Tab-separated values.
    CsvTab,
    /// Comma-separated values.
    CsvComma,
    /// Semicolon-separated values.
    CsvSemicolon,
    /// Rust source (`&[(&str, &str)]` constant).
    Source,
}

impl OutputFormat {
    fn code(self) -> u8 {
        match self {
            OutputFormat::None => 0,
            OutputFormat::CsvTab => 1,
            OutputFormat::CsvComma => 2,
            OutputFormat::CsvSemicolon => 3,
            OutputFormat::Source => 4,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "bignum_bernoulli=warn",
        1 => "bignum_bernoulli=info",
        _ => "bignum_bernoulli=debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = BernState::new(args.count);

    let resumed = match &args.checkpoint {
        Some(path) => state.load_file(path)?,
        None => false,
    };
    if resumed {
        tracing::info!(produced = state.produced(), "resumed from checkpoint");
    } else {
        tracing::info!(count = args.count, "starting fresh computation");
    }

    let interval = Duration::from_secs(args.checkpoint_interval);
    let mut last_publish = Instant::now();

    state.run(|snapshot, permille| {
        tracing::debug!(permille, produced = snapshot.produced(), "progress");
        if let Some(path) = &args.checkpoint {
            if last_publish.elapsed() >= interval {
                if let Err(e) = snapshot.save_file(path) {
                    tracing::warn!(error = %e, "checkpoint publish failed");
                } else {
                    tracing::info!(produced = snapshot.produced(), "checkpoint published");
                }
                last_publish = Instant::now();
            }
        }
    });

    if let Some(path) = &args.checkpoint {
        state.save_file(path)?;
        tracing::info!("final checkpoint published");
    }

    let pairs: Vec<_> = state
        .results()
        .map(|(n, d)| (n.clone(), d.clone()))
        .collect();
    let rows = formatter::rows_from_pairs(&pairs);
    let rendered = formatter::formatter_for_code(args.format.code()).format_table(&rows);

    if !rendered.is_empty() {
        match &args.outfile {
            Some(path) => std::fs::write(path, rendered)?,
            None => print!("{rendered}"),
        }
    }

    if args.json_summary {
        let summary = RunSummary {
            count: args.count,
            produced: state.produced(),
            loop_count: state.loop_count(),
            checkpoint_path: args.checkpoint.as_ref().map(|p| p.display().to_string()),
        };
        eprintln!("{}", summary.to_json(true)?);
    }

    tracing::info!(produced = state.produced(), "computation complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positional_count_and_defaults() {
        let args = Args::try_parse_from(["bernoulli-gen", "10"]).unwrap();
        assert_eq!(args.count, 10);
        assert!(matches!(args.format, OutputFormat::None));
        assert_eq!(args.checkpoint_interval, 30);
        assert!(!args.json_summary);
    }

    #[test]
    fn parses_format_and_checkpoint_flags() {
        let args = Args::try_parse_from([
            "bernoulli-gen",
            "50",
            "--format",
            "csv-tab",
            "--checkpoint",
            "Bernoulli.bin",
            "--checkpoint-interval",
            "5",
            "--json-summary",
        ])
        .unwrap();
        assert!(matches!(args.format, OutputFormat::CsvTab));
        assert_eq!(args.checkpoint, Some(PathBuf::from("Bernoulli.bin")));
        assert_eq!(args.checkpoint_interval, 5);
        assert!(args.json_summary);
    }

    #[test]
    fn verbose_flag_is_repeatable() {
        let args = Args::try_parse_from(["bernoulli-gen", "1", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn count_is_required() {
        assert!(Args::try_parse_from(["bernoulli-gen"]).is_err());
    }
}
