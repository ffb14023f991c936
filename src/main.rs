mod app;
mod color;
mod data;
mod render;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::QcViewerApp;
use eframe::egui;
use state::AppState;

const DEFAULT_DATASET: &str = "gtex_qc_demo.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Dataset path from argv[1], falling back to the bundled demo file.
    // Load happens once, before the UI starts; a missing or unparsable
    // file aborts startup.
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));
    let table = data::loader::load_csv(&path)
        .with_context(|| format!("loading QC dataset from {}", path.display()))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GTEx QC Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(QcViewerApp::new(AppState::new(table))))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
