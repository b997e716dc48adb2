use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// MeasurementRow – one line of a timing file
// ---------------------------------------------------------------------------

/// One sample point of a timing run: the number of container entries plus
/// mean elapsed time and variance for each of the two compared layouts.
/// Times are in seconds as written by the harness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRow {
    /// Sample size (x-axis).
    pub entries: f64,
    /// Mean elapsed time of the standard layout.
    pub std_mean: f64,
    /// Variance of the standard-layout measurement.
    pub std_variance: f64,
    /// Mean elapsed time of the structure-of-arrays layout.
    pub smart_mean: f64,
    /// Variance of the structure-of-arrays measurement.
    pub smart_variance: f64,
}

impl MeasurementRow {
    /// Number of columns a timing file row carries.
    pub const FIELDS: usize = 5;
}

impl fmt::Display for MeasurementRow {
    /// File order, space-separated. `f64`'s `Display` prints the shortest
    /// representation that round-trips, so echoed rows match the parsed
    /// values exactly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.entries, self.std_mean, self.std_variance, self.smart_mean, self.smart_variance
        )
    }
}

// ---------------------------------------------------------------------------
// TimingDataset – the rows loaded from one file
// ---------------------------------------------------------------------------

/// All measurement rows of one benchmarked container flavour, in file order.
#[derive(Debug, Clone)]
pub struct TimingDataset {
    /// Dataset label (`array` or `vector`), also the panel title.
    pub label: String,
    /// File the rows were read from.
    pub path: PathBuf,
    /// Rows in file order.
    pub rows: Vec<MeasurementRow>,
}

impl TimingDataset {
    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the audit trail of what will be plotted: a `Values for <label>`
    /// header followed by every row, one per line, file order preserved.
    pub fn write_audit<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Values for {}", self.label)?;
        for row in &self.rows {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// DatasetSource – label → file path mapping
// ---------------------------------------------------------------------------

/// Where one dataset comes from. The figure is assembled from an explicit
/// list of these rather than hardcoded file names, so tests can point at
/// fixture files.
#[derive(Debug, Clone)]
pub struct DatasetSource {
    pub label: String,
    pub path: PathBuf,
}

impl DatasetSource {
    pub fn new(label: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        DatasetSource {
            label: label.into(),
            path: path.into(),
        }
    }
}

/// The default figure: `array` then `vector`, each read from `<label>.txt`
/// under the given data directory.
pub fn default_sources(dir: &Path) -> Vec<DatasetSource> {
    ["array", "vector"]
        .iter()
        .map(|label| DatasetSource::new(*label, dir.join(format!("{label}.txt"))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> MeasurementRow {
        MeasurementRow {
            entries: 100.0,
            std_mean: 0.004,
            std_variance: 2.5e-7,
            smart_mean: 0.002,
            smart_variance: 1e-7,
        }
    }

    #[test]
    fn display_round_trips_through_parse() {
        let row = sample_row();
        let line = row.to_string();
        let parsed: Vec<f64> = line
            .split(' ')
            .map(|tok| tok.parse().expect("echoed field parses back"))
            .collect();
        assert_eq!(
            parsed,
            vec![
                row.entries,
                row.std_mean,
                row.std_variance,
                row.smart_mean,
                row.smart_variance
            ]
        );
    }

    #[test]
    fn audit_prints_header_and_every_row() {
        let ds = TimingDataset {
            label: "array".to_string(),
            path: PathBuf::from("array.txt"),
            rows: vec![sample_row(), sample_row(), sample_row()],
        };

        let mut buf = Vec::new();
        ds.write_audit(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 1 + ds.len());
        assert_eq!(lines[0], "Values for array");
        for line in &lines[1..] {
            assert_eq!(line.split(' ').count(), MeasurementRow::FIELDS);
        }
    }

    #[test]
    fn default_sources_map_array_then_vector() {
        let sources = default_sources(Path::new("data"));
        let labels: Vec<&str> = sources.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["array", "vector"]);
        assert_eq!(sources[0].path, Path::new("data").join("array.txt"));
        assert_eq!(sources[1].path, Path::new("data").join("vector.txt"));
    }
}
