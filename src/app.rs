use eframe::egui;

use crate::chart::{self, Figure};
use crate::data::model::TimingDataset;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BenchScopeApp {
    datasets: Vec<TimingDataset>,
    figure: Figure,
}

impl BenchScopeApp {
    /// Assemble the figure once; nothing mutates after load.
    pub fn new(datasets: Vec<TimingDataset>) -> Self {
        let figure = chart::build_figure(&datasets);
        Self { datasets, figure }
    }
}

impl eframe::App for BenchScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.datasets, &self.figure);
        });

        // ---- Central panel: one column per timing panel ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.figure.panels.is_empty() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("No timing data loaded");
                });
                return;
            }

            ui.columns(self.figure.panels.len(), |columns| {
                for (column, panel) in columns.iter_mut().zip(&self.figure.panels) {
                    plot::timing_panel(column, panel);
                }
            });
        });
    }
}
