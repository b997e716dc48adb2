//! UI layer: egui widgets for the status bar and the timing panels.

pub mod panels;
pub mod plot;
