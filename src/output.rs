//! Writing tables as delimited text.

use crate::errors::Result;
use log::info;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// A table being written, one record at a time.
///
/// The header is written on construction, so even an empty table has one row.
pub struct TableWriter<W: Write> {
    writer: csv::Writer<W>,
    rows: u64,
}

impl TableWriter<io::BufWriter<fs::File>> {
    pub fn create(path: &Path, header: &[&str]) -> Result<Self> {
        info!(target: "crictab", "write: {}", path.display());
        let file = fs::File::create(path)?;
        TableWriter::new(io::BufWriter::new(file), header)
    }
}

impl<W: Write> TableWriter<W> {
    pub fn new(writer: W, header: &[&str]) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(header)?;
        Ok(TableWriter { writer, rows: 0 })
    }

    pub fn write_row<S: AsRef<[u8]>>(&mut self, row: &[S]) -> Result<()> {
        self.writer.write_record(row)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(self) -> Result<W> {
        let inner = self.writer.into_inner().map_err(|e| e.into_error())?;
        Ok(inner)
    }
}

/// Write a whole table to `path`.
pub fn write_table(path: &Path, header: &[&str], rows: &[Vec<String>]) -> Result<u64> {
    let mut table = TableWriter::create(path, header)?;
    for row in rows {
        table.write_row(row)?;
    }
    let rows = table.rows();
    table.finish()?.flush()?;
    Ok(rows)
}
