use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::loader::load_file;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.summary());
        ui.separator();

        if ui
            .selectable_label(state.options.clamp_z, "Clamp Z to [0, 1]")
            .clicked()
        {
            let clamp_z = !state.options.clamp_z;
            if let Err(e) = state.set_clamp_z(clamp_z) {
                log::error!("Failed to rebuild figure: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }

        if ui.button("Reset views").clicked() {
            state.reset_views();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for another sample file and show it in place of the current one.
pub fn open_file_dialog(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new()
        .set_title("Open sample directions")
        .add_filter("JSON", &["json"]);
    if let Some(dir) = state.source.parent().filter(|d| d.is_dir()) {
        dialog = dialog.set_directory(dir);
    }

    let Some(path) = dialog.pick_file() else {
        return;
    };

    let result = load_file(&path).and_then(|samples| state.set_samples(&path, samples));
    if let Err(e) = result {
        log::error!("Failed to load {}: {e}", path.display());
        state.status_message = Some(format!("Error: {e}"));
    }
}
