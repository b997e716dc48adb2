use crate::data::model::TimingDataset;

// ---------------------------------------------------------------------------
// Figure model – everything the window draws, computed without a display
// ---------------------------------------------------------------------------

/// Seconds → milliseconds.
pub const MS_PER_SEC: f64 = 1e3;

/// Series names as shown in each panel's legend.
pub const SMARTIT_SERIES: &str = "smartit";
pub const STD_SERIES: &str = "std";

/// One plotted sample: the raw entry count, its position on the logarithmic
/// x-axis and the mean / error-bar half-height in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorBarPoint {
    pub entries: f64,
    /// `log10(entries)` – the actual plot-space x coordinate.
    pub x: f64,
    pub y_ms: f64,
    pub err_ms: f64,
}

/// One line-with-error-bars series.
#[derive(Debug, Clone)]
pub struct ErrorBarSeries {
    pub name: &'static str,
    pub points: Vec<ErrorBarPoint>,
}

/// One subplot: the two series for a single container flavour.
#[derive(Debug, Clone)]
pub struct ChartPanel {
    /// Panel title: the dataset label.
    pub title: String,
    pub smartit: ErrorBarSeries,
    pub std: ErrorBarSeries,
    /// Rows dropped because `entries` was not positive (a log axis cannot
    /// place them). Clipped, not an error.
    pub clipped: usize,
}

impl ChartPanel {
    /// Legend entries, in draw order.
    pub fn series_names(&self) -> [&'static str; 2] {
        [self.smartit.name, self.std.name]
    }
}

/// The assembled two-panel comparison figure.
#[derive(Debug, Clone)]
pub struct Figure {
    pub panels: Vec<ChartPanel>,
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Build the full figure, one panel per dataset, dataset order preserved.
pub fn build_figure(datasets: &[TimingDataset]) -> Figure {
    Figure {
        panels: datasets.iter().map(build_panel).collect(),
    }
}

/// Build one panel from a dataset.
///
/// Means are scaled ×1000 into milliseconds. Error-bar half-heights are
/// `sqrt(smart_variance) × 1000`.
// NOTE: both series take their error bars from smart_variance.
pub fn build_panel(dataset: &TimingDataset) -> ChartPanel {
    let mut smartit = Vec::with_capacity(dataset.len());
    let mut std = Vec::with_capacity(dataset.len());
    let mut clipped = 0;

    for row in &dataset.rows {
        if row.entries <= 0.0 {
            clipped += 1;
            continue;
        }
        let x = row.entries.log10();
        let err_ms = row.smart_variance.sqrt() * MS_PER_SEC;

        smartit.push(ErrorBarPoint {
            entries: row.entries,
            x,
            y_ms: row.smart_mean * MS_PER_SEC,
            err_ms,
        });
        std.push(ErrorBarPoint {
            entries: row.entries,
            x,
            y_ms: row.std_mean * MS_PER_SEC,
            err_ms,
        });
    }

    ChartPanel {
        title: dataset.label.clone(),
        smartit: ErrorBarSeries {
            name: SMARTIT_SERIES,
            points: smartit,
        },
        std: ErrorBarSeries {
            name: STD_SERIES,
            points: std,
        },
        clipped,
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::data::model::MeasurementRow;

    use super::*;

    fn dataset(label: &str, rows: Vec<MeasurementRow>) -> TimingDataset {
        TimingDataset {
            label: label.to_string(),
            path: PathBuf::from(format!("{label}.txt")),
            rows,
        }
    }

    fn row(entries: f64) -> MeasurementRow {
        MeasurementRow {
            entries,
            std_mean: 0.004,
            std_variance: 4e-7,
            smart_mean: 0.002,
            smart_variance: 1e-7,
        }
    }

    #[test]
    fn means_are_scaled_to_milliseconds() {
        let panel = build_panel(&dataset("array", vec![row(100.0)]));

        let smart = panel.smartit.points[0];
        assert!((smart.y_ms - 2.0).abs() < 1e-12);
        // sqrt(1e-7) * 1000 ≈ 0.316
        assert!((smart.err_ms - 0.31622776601683794).abs() < 1e-12);

        let standard = panel.std.points[0];
        assert!((standard.y_ms - 4.0).abs() < 1e-12);
        // std bars carry the smart variance as well
        assert_eq!(standard.err_ms, smart.err_ms);
    }

    #[test]
    fn non_positive_entries_are_clipped_not_errors() {
        let panel = build_panel(&dataset(
            "array",
            vec![row(0.0), row(-5.0), row(10.0)],
        ));

        assert_eq!(panel.clipped, 2);
        assert_eq!(panel.smartit.points.len(), 1);
        assert_eq!(panel.std.points.len(), 1);
        assert_eq!(panel.smartit.points[0].entries, 10.0);
    }

    #[test]
    fn decade_entries_land_evenly_spaced() {
        let panel = build_panel(&dataset(
            "array",
            vec![row(1.0), row(10.0), row(100.0), row(1000.0)],
        ));

        let xs: Vec<f64> = panel.smartit.points.iter().map(|p| p.x).collect();
        for (i, pair) in xs.windows(2).enumerate() {
            assert!(
                (pair[1] - pair[0] - 1.0).abs() < 1e-12,
                "step {i} is not one decade: {pair:?}"
            );
        }
    }

    #[test]
    fn legend_is_exactly_smartit_and_std_per_panel() {
        let figure = build_figure(&[
            dataset("array", vec![row(100.0)]),
            dataset("vector", vec![row(100.0)]),
        ]);

        assert_eq!(figure.panels.len(), 2);
        assert_eq!(figure.panels[0].title, "array");
        assert_eq!(figure.panels[1].title, "vector");
        for panel in &figure.panels {
            assert_eq!(panel.series_names(), ["smartit", "std"]);
        }
    }
}
