//! emx-plaintext CLI
//!
//! Report whether files (or stdin) are plaintext or binary.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use emx_plaintext::{Detection, Detector};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Input name that means stdin
const STDIN_ARG: &str = "-";

#[derive(Parser, Debug)]
#[command(name = "emx-plaintext")]
#[command(author = "nzinfo <li.monan@gmail.com>")]
#[command(version)]
#[command(about = "Check whether files are plaintext or binary")]
struct Cli {
    /// Files or directories to check (default: stdin, `-` also means stdin)
    inputs: Vec<PathBuf>,

    /// Only inspect the first N kilobytes of each input
    #[arg(short = 'p', long, value_name = "N")]
    preview_kb: Option<usize>,

    /// Descend into directories
    #[arg(short, long)]
    recursive: bool,

    /// Print nothing, only set the exit status
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose output (repeat for more log detail)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Exit status when any input is binary
const EXIT_BINARY: u8 = 1;
/// Exit status on errors
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_BINARY),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Check every input, returning whether all of them are plaintext
fn run(cli: &Cli) -> Result<bool> {
    let mut detector = Detector::new();
    if let Some(kb) = cli.preview_kb {
        detector = detector.with_preview_kb(kb)?;
    }

    if cli.inputs.is_empty() {
        return check_stdin(cli, &detector);
    }

    let mut all_plaintext = true;
    for input in &cli.inputs {
        let plaintext = if input.as_os_str() == STDIN_ARG {
            check_stdin(cli, &detector)?
        } else if input.is_dir() {
            check_directory(cli, &detector, input)?
        } else {
            check_file(cli, &detector, input)?
        };
        all_plaintext &= plaintext;
    }

    Ok(all_plaintext)
}

fn check_stdin(cli: &Cli, detector: &Detector) -> Result<bool> {
    let detection = detector
        .detect_reader(io::stdin().lock())
        .context("Failed to read stdin")?;
    report(cli, "<stdin>", &detection);
    Ok(detection.is_plaintext())
}

fn check_file(cli: &Cli, detector: &Detector, path: &Path) -> Result<bool> {
    let detection = detector
        .detect_file(path)
        .with_context(|| format!("Failed to check file: {}", path.display()))?;
    report(cli, &path.display().to_string(), &detection);
    Ok(detection.is_plaintext())
}

fn check_directory(cli: &Cli, detector: &Detector, dir: &Path) -> Result<bool> {
    if !cli.recursive {
        anyhow::bail!("{} is a directory (use --recursive)", dir.display());
    }

    let mut all_plaintext = true;
    for entry in walkdir::WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        all_plaintext &= check_file(cli, detector, entry.path())?;
    }

    log::info!("Checked directory: {}", dir.display());
    Ok(all_plaintext)
}

fn report(cli: &Cli, name: &str, detection: &Detection) {
    if cli.quiet {
        return;
    }

    match detection {
        Detection::Plaintext => println!("{}: text", name),
        Detection::Binary { reason } if cli.verbose > 0 => {
            println!("{}: binary ({})", name, reason)
        }
        Detection::Binary { .. } => println!("{}: binary", name),
    }
}
