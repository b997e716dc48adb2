use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{DatasetSource, MeasurementRow, TimingDataset};

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Failure loading a timing file. Every variant is fatal for the run; there
/// is no partial-result mode.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    FileMissing { path: PathBuf },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {reason}", path.display())]
    DataFormat {
        path: PathBuf,
        /// 1-based row number in the file.
        line: usize,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load every source, in order, before anything is printed or plotted.
/// A missing or malformed second file therefore never produces a partial
/// figure.
pub fn load_all(sources: &[DatasetSource]) -> Result<Vec<TimingDataset>, LoadError> {
    sources.iter().map(load_dataset).collect()
}

/// Load one timing file: a headerless table of rows with exactly five
/// single-space-separated floating-point columns
/// (`entries std_mean std_variance smart_mean smart_variance`).
pub fn load_dataset(source: &DatasetSource) -> Result<TimingDataset, LoadError> {
    let file = File::open(&source.path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            LoadError::FileMissing {
                path: source.path.clone(),
            }
        } else {
            LoadError::Io {
                path: source.path.clone(),
                source: e,
            }
        }
    })?;

    let rows = read_rows(file, &source.path)?;

    Ok(TimingDataset {
        label: source.label.clone(),
        path: source.path.clone(),
        rows,
    })
}

// ---------------------------------------------------------------------------
// Table parsing
// ---------------------------------------------------------------------------

fn read_rows<R: io::Read>(reader: R, path: &Path) -> Result<Vec<MeasurementRow>, LoadError> {
    // Flexible record lengths: short rows must reach our own column-count
    // check, which reports the row number.
    let mut table = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (idx, record) in table.records().enumerate() {
        let line = idx + 1;
        let record = record.map_err(|e| LoadError::DataFormat {
            path: path.to_path_buf(),
            line,
            reason: e.to_string(),
        })?;

        rows.push(parse_row(&record, path, line)?);
    }

    Ok(rows)
}

fn parse_row(
    record: &csv::StringRecord,
    path: &Path,
    line: usize,
) -> Result<MeasurementRow, LoadError> {
    if record.len() != MeasurementRow::FIELDS {
        return Err(LoadError::DataFormat {
            path: path.to_path_buf(),
            line,
            reason: format!(
                "expected {} columns, found {}",
                MeasurementRow::FIELDS,
                record.len()
            ),
        });
    }

    let mut fields = [0.0f64; MeasurementRow::FIELDS];
    for (col, (slot, tok)) in fields.iter_mut().zip(record.iter()).enumerate() {
        *slot = tok.trim().parse().map_err(|_| LoadError::DataFormat {
            path: path.to_path_buf(),
            line,
            reason: format!("column {}: '{tok}' is not a number", col + 1),
        })?;
    }

    let [entries, std_mean, std_variance, smart_mean, smart_variance] = fields;
    Ok(MeasurementRow {
        entries,
        std_mean,
        std_variance,
        smart_mean,
        smart_variance,
    })
}
