use eframe::egui::{Color32, RichText, Ui};

use crate::chart::Figure;
use crate::data::model::TimingDataset;

// ---------------------------------------------------------------------------
// Top bar – dataset summary
// ---------------------------------------------------------------------------

/// Render the top status bar: one summary per dataset plus a warning when
/// the log axis had to clip rows.
pub fn top_bar(ui: &mut Ui, datasets: &[TimingDataset], figure: &Figure) {
    ui.horizontal(|ui: &mut Ui| {
        for (ds, panel) in datasets.iter().zip(&figure.panels) {
            ui.label(format!(
                "{}: {} rows ({})",
                ds.label,
                ds.len(),
                ds.path.display()
            ));
            if panel.clipped > 0 {
                ui.label(
                    RichText::new(format!("{} rows clipped from log axis", panel.clipped))
                        .color(Color32::RED),
                );
            }
            ui.separator();
        }
    });
}
