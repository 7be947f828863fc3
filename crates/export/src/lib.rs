//! Export helpers for mission reports (JSON) and sweep tables (CSV).

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;

use thiserror::Error;

pub mod report;
pub mod sweep;

pub use report::{DeltaVSplit, FlightParameters, MissionReport};
pub use sweep::{SweepRow, write_sweep_csv};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Create a buffered file writer, creating missing parent directories.
pub fn writer_for_path(path: &Path) -> io::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(path)?))
}
