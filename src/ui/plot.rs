use eframe::egui::{Color32, Ui};
use egui_plot::{
    Corner, GridInput, GridMark, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, PlotUi,
    Points,
};

use crate::chart::{ChartPanel, ErrorBarSeries};

// ---------------------------------------------------------------------------
// Timing panel (one subplot)
// ---------------------------------------------------------------------------

/// Fixed series colours: orange for `smartit`, blue for `std`.
const SMARTIT_COLOR: Color32 = Color32::from_rgb(255, 127, 14);
const STD_COLOR: Color32 = Color32::from_rgb(31, 119, 180);

const LINE_WIDTH: f32 = 1.5;
const MARKER_RADIUS: f32 = 5.0;

/// Render one panel: title, the two error-bar series, log-decade x grid,
/// upper-left legend.
pub fn timing_panel(ui: &mut Ui, panel: &ChartPanel) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(&panel.title);
    });

    Plot::new(format!("timing_panel_{}", panel.title))
        .legend(Legend::default().position(Corner::LeftTop))
        .x_axis_label("entries")
        .y_axis_label("time (ms)")
        .x_grid_spacer(decade_grid)
        .x_axis_formatter(|mark, _range| decade_label(mark))
        .show(ui, |plot_ui| {
            draw_series(
                plot_ui,
                &panel.smartit,
                SMARTIT_COLOR,
                LineStyle::Solid,
                MarkerShape::Asterisk,
            );
            draw_series(
                plot_ui,
                &panel.std,
                STD_COLOR,
                LineStyle::dashed_loose(),
                MarkerShape::Up,
            );
        });
}

fn draw_series(
    plot_ui: &mut PlotUi,
    series: &ErrorBarSeries,
    color: Color32,
    style: LineStyle,
    marker: MarkerShape,
) {
    // Error bars draw first so the markers sit on top. They stay unnamed,
    // which keeps them out of the legend.
    for p in &series.points {
        if p.err_ms > 0.0 {
            let bar = vec![[p.x, p.y_ms - p.err_ms], [p.x, p.y_ms + p.err_ms]];
            plot_ui.line(Line::new(PlotPoints::new(bar)).color(color).width(LINE_WIDTH));
        }
    }

    let line: PlotPoints = series.points.iter().map(|p| [p.x, p.y_ms]).collect();
    plot_ui.line(
        Line::new(line)
            .color(color)
            .width(LINE_WIDTH)
            .style(style)
            .name(series.name),
    );

    let markers: PlotPoints = series.points.iter().map(|p| [p.x, p.y_ms]).collect();
    plot_ui.points(
        Points::new(markers)
            .shape(marker)
            .radius(MARKER_RADIUS)
            .color(color)
            .name(series.name),
    );
}

// ---------------------------------------------------------------------------
// Log-decade axis
// ---------------------------------------------------------------------------

/// Grid marks at every integer decade inside the current x bounds. Points
/// live at `log10(entries)`, so `1, 10, 100, …` land one grid step apart.
fn decade_grid(input: GridInput) -> Vec<GridMark> {
    let (min, max) = input.bounds;
    let first = min.floor() as i64;
    let last = max.ceil() as i64;
    (first..=last)
        .map(|decade| GridMark {
            value: decade as f64,
            step_size: 1.0,
        })
        .collect()
}

/// Tick label for a decade mark: the entry count itself (`100`, `1000`, …).
/// Non-decade marks and out-of-range decades get no label.
fn decade_label(mark: GridMark) -> String {
    let exp = mark.value.round();
    if (mark.value - exp).abs() > 1e-6 {
        return String::new();
    }
    if (0.0..=6.0).contains(&exp) {
        format!("{:.0}", 10f64.powf(exp))
    } else {
        format!("1e{exp:.0}")
    }
}
