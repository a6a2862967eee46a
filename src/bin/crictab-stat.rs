use anyhow::{Result, anyhow};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use crictab::corpus::{self, DEFAULT_SUFFIX, LoadOptions};
use crictab::information::{self, CorpusStats};
use std::path::PathBuf;

/// Summarize a directory of match records
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Input directory (match records)
    #[arg(default_value = "data/all/")]
    indir: PathBuf,
    /// File name suffix of match records
    #[arg(long, default_value = DEFAULT_SUFFIX)]
    suffix: String,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    let options = LoadOptions {
        suffix: &args.suffix,
        ..LoadOptions::default()
    };
    let corpus = corpus::load_dir(&args.indir, &options)
        .map_err(|e| anyhow!("cannot read {}: {e}", args.indir.display()))?;
    let stats = CorpusStats::from_documents(&corpus.documents);
    println!("directory: {}", args.indir.display());
    println!("- documents: {}", stats.documents);
    println!("- failures: {}", corpus.failures.len());
    println!("- innings: {}", stats.innings);
    println!("- deliveries: {}", stats.deliveries);
    println!("- wickets: {}", stats.wickets);
    println!("- distinct teams: {}", stats.teams);
    println!(
        "- match types: {}",
        information::explain_match_types(&stats.match_types)
    );
    for failure in &corpus.failures {
        println!("  {failure}");
    }
    Ok(())
}
