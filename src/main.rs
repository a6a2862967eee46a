use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use crictab::corpus::{DEFAULT_SUFFIX, FailurePolicy};
use crictab::driver::{self, DriverArgs, Summary};
use crictab::errors::{LoadFailure, OError, Result};
use log::{error, info, warn};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use std::{error, fs, io, process};

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input directory (match records)
    #[arg(default_value = "data/all/")]
    indir: PathBuf,
    /// Output file for games (CSV)
    #[arg(long, default_value = "data/games.csv")]
    games: PathBuf,
    /// Output file for deliveries (CSV)
    #[arg(long, default_value = "data/deliveries.csv")]
    deliveries: PathBuf,
    /// File name suffix of match records
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,
    /// Keep documents that fail to load, as zero-valued rows
    #[arg(long)]
    keep_failed: bool,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<PathBuf>,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn store_json<T: Serialize>(error_file: &Path, value: &T) -> Result<()> {
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}

fn store_error(error_file: &Path, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    store_json(error_file, &error)
}

fn store_failures(error_file: &Path, failures: &[LoadFailure]) -> Result<()> {
    store_json(error_file, &failures)
}

fn process(args: &Args) -> Result<()> {
    let driver_args = DriverArgs {
        indir: &args.indir,
        games_out: &args.games,
        deliveries_out: &args.deliveries,
        suffix: &args.suffix,
        policy: if args.keep_failed {
            FailurePolicy::Placeholder
        } else {
            FailurePolicy::Skip
        },
    };
    let Summary { failures, .. } = driver::convert(&driver_args)?;
    if !failures.is_empty() {
        warn!(target: "crictab", "{} files could not be loaded", failures.len());
    }
    if let Some(error_file) = &args.error_file {
        store_failures(error_file, &failures)?;
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    let start = Instant::now();
    info!(target: "crictab", "started");
    match process(&args) {
        Ok(()) => {
            info!(
                target: "crictab",
                "finished in {:.3} s",
                start.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            match &args.error_file {
                Some(filename) => match store_error(filename, &*e) {
                    Ok(()) => {
                        error!(target: "crictab", "{e}");
                        info!(target: "crictab", "error reported: {}", filename.display());
                    }
                    Err(e2) => {
                        error!(target: "crictab", "{e}");
                        error!(target: "crictab", "{e2}");
                    }
                },
                None => error!(target: "crictab", "{e}"),
            }
            process::exit(1);
        }
    }
}
