use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SampleGridApp {
    pub state: AppState,
}

impl SampleGridApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for SampleGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: subplot grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::sample_grid(ui, &mut self.state);
        });
    }
}
