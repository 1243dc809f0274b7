use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the filter panel. Every control is disabled until a file has
/// been loaded; edits feed straight into the state and the visible rows
/// are recomputed at the end of the pass.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No data loaded.");
        ui.add_space(4.0);
    }

    let enabled = state.controls_enabled();
    let category_options: Vec<(String, String)> = state
        .dataset
        .as_ref()
        .map(|set| set.category_options())
        .unwrap_or_default();
    let amount_cap = state.amount_cap;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add_enabled_ui(enabled, |ui: &mut Ui| {
                // ---- Date range ----
                ui.strong("Date range");
                ui.horizontal(|ui: &mut Ui| {
                    ui.checkbox(&mut state.date_from_enabled, "From");
                    ui.add_enabled(
                        state.date_from_enabled,
                        DatePickerButton::new(&mut state.date_from).id_salt("date_from"),
                    );
                });
                ui.horizontal(|ui: &mut Ui| {
                    ui.checkbox(&mut state.date_to_enabled, "To");
                    ui.add_enabled(
                        state.date_to_enabled,
                        DatePickerButton::new(&mut state.date_to).id_salt("date_to"),
                    );
                });
                ui.separator();

                // ---- Categories ----
                ui.horizontal(|ui: &mut Ui| {
                    ui.strong("Categories");
                    if ui.small_button("Clear").clicked() {
                        state.clear_categories();
                    }
                });
                ui.label(RichText::new("Empty selection shows all").weak().small());
                for (label, value) in &category_options {
                    let mut checked = state.selected_categories.contains(value);
                    let swatch = state.category_colors.color_for(value);
                    let text = RichText::new(label).color(swatch);
                    if ui.checkbox(&mut checked, text).changed() {
                        state.toggle_category(value);
                    }
                }
                ui.separator();

                // ---- Amount range ----
                ui.strong("Amount range");
                ui.add(
                    egui::Slider::new(&mut state.amount_range[0], 0.0..=amount_cap)
                        .text("min")
                        .fixed_decimals(0),
                );
                ui.add(
                    egui::Slider::new(&mut state.amount_range[1], 0.0..=amount_cap)
                        .text("max")
                        .fixed_decimals(0),
                );
                ui.separator();

                if ui.button("Reset filters").clicked() {
                    state.reset_filters();
                }
            });
        });

    // Recompute the visible rows after any widget edits.
    state.refilter();
}

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

        if let Some(set) = &state.dataset {
            ui.label(format!(
                "{} rows loaded, {} matching",
                set.len(),
                state.visible_indices.len()
            ));
            ui.separator();
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick a CSV file and load it. A failed load reports the error in the top
/// bar and leaves any previously loaded set untouched; a successful load
/// replaces it wholesale.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path, &state.config.table) {
            Ok(set) => {
                log::info!(
                    "Loaded {} transactions across {} categories",
                    set.len(),
                    set.categories.len()
                );
                state.set_dataset(set);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
