use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use sample_grid::app::SampleGridApp;
use sample_grid::config::{ViewerConfig, MIN_WINDOW_SIZE, WINDOW_SIZE};
use sample_grid::data::loader::load_file;
use sample_grid::state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let config = ViewerConfig::parse();

    // Everything is checked before the window opens: no partial figure.
    let samples = load_file(&config.path)?;
    let state = AppState::new(&config.path, samples, config.plot_options())
        .with_context(|| format!("plotting {}", config.path.display()))?;
    log::info!(
        "Showing {} subplots ({} rows)",
        state.figure.subplots.len(),
        state.figure.layout.rows()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(MIN_WINDOW_SIZE),
        ..Default::default()
    };

    // Blocks until the window is closed.
    eframe::run_native(
        "Sample Grid – Importance Sampling Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(SampleGridApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("display failed: {e}"))
}
