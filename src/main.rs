mod app;
mod chart;
mod data;
mod ui;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use eframe::egui;

use app::BenchScopeApp;
use data::loader;
use data::model::default_sources;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let data_dir = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    if args.next().is_some() {
        bail!("only one argument is allowed (data directory)");
    }

    // Load everything up front: a bad or missing file aborts the run before
    // any row is echoed or any window opens.
    let sources = default_sources(&data_dir);
    let datasets = loader::load_all(&sources)?;

    let mut stdout = std::io::stdout().lock();
    for ds in &datasets {
        ds.write_audit(&mut stdout)
            .with_context(|| format!("echoing rows of {}", ds.path.display()))?;
        log::info!("loaded {} rows from {}", ds.len(), ds.path.display());
    }
    stdout.flush().ok();
    drop(stdout);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Bench Scope – Timing Viewer",
        options,
        Box::new(move |_cc| Ok(Box::new(BenchScopeApp::new(datasets)))),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
