//! Main entry point for converting a corpus into tables.

use crate::corpus::{self, FailurePolicy, LoadOptions};
use crate::errors::{self, LoadFailure, Result};
use crate::information;
use crate::output::TableWriter;
use crate::project::{self, DELIVERY_COLUMNS, GAME_COLUMNS};
use log::info;
use std::io::Write;
use std::path::Path;

/// What to convert, and where to.
pub struct DriverArgs<'a> {
    /// Directory of match records.
    pub indir: &'a Path,

    /// Output file for the per-game table.
    pub games_out: &'a Path,

    /// Output file for the per-delivery table.
    pub deliveries_out: &'a Path,

    /// File name suffix of match records, without the dot.
    pub suffix: &'a str,

    /// Whether documents that fail to load still get a (zero-valued) game row.
    pub policy: FailurePolicy,
}

/// What a conversion produced.
#[derive(Debug, PartialEq, Eq)]
pub struct Summary {
    pub documents: usize,
    pub failures: Vec<LoadFailure>,
    pub game_rows: u64,
    pub delivery_rows: u64,
}

fn check_args(args: &DriverArgs) -> Result<()> {
    if args.suffix.is_empty() || args.suffix.contains(['.', '/']) {
        return Err(errors::invalid_argument(format!(
            "suffix should be a plain file extension, got '{}'",
            args.suffix
        )));
    }
    if args.games_out == args.deliveries_out {
        return Err(errors::invalid_argument(format!(
            "games and deliveries would both be written to {}",
            args.games_out.display()
        )));
    }
    Ok(())
}

/// Convert everything.
///
/// This is the main entry point for the library. Per-document failures are
/// returned in [Summary::failures]; any other error aborts the run.
pub fn convert(args: &DriverArgs) -> Result<Summary> {
    check_args(args)?;
    let options = LoadOptions {
        suffix: args.suffix,
        policy: args.policy,
    };
    let corpus = corpus::load_dir(args.indir, &options)?;
    information::statistics(&corpus);

    let mut games = TableWriter::create(args.games_out, &GAME_COLUMNS)?;
    let mut deliveries = TableWriter::create(args.deliveries_out, &DELIVERY_COLUMNS)?;
    for doc in &corpus.documents {
        games.write_row(&project::game_row(doc))?;
        for row in project::delivery_rows(doc) {
            deliveries.write_row(&row)?;
        }
    }
    let summary = Summary {
        documents: corpus.documents.len(),
        failures: corpus.failures,
        game_rows: games.rows(),
        delivery_rows: deliveries.rows(),
    };
    games.finish()?.flush()?;
    deliveries.finish()?.flush()?;
    info!(
        target: "crictab",
        "wrote {} game rows, {} delivery rows",
        summary.game_rows,
        summary.delivery_rows
    );
    Ok(summary)
}
