//! File collaborators of a run: the grid reader and the metrics writer.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::metrics::{ReportFormat, RunMetrics};

/// Reads an `n x n` grid of `'0'`/`'1'` lines.
///
/// Only a missing or unreadable file is an error; short or malformed lines
/// are accepted as they are (see [`Grid::from_rows`]).
pub fn read_grid(path: &Path, n: usize) -> Result<Grid> {
    let input_err = |source| Error::InputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let bytes = std::fs::read(path).map_err(input_err)?;
    let text = String::from_utf8_lossy(&bytes);
    Ok(Grid::from_rows(n, text.lines()))
}

pub fn write_metrics(path: &Path, metrics: &RunMetrics, format: ReportFormat) -> Result<()> {
    let output_err = |source| Error::OutputUnavailable {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(output_err)?;
    metrics
        .write_report(BufWriter::new(file), format)
        .map_err(output_err)
}
