// src/gui/components/controls.rs
//
// Top bar: fetch inputs, Fetch/Copy buttons, basemap picker, status line.

use eframe::egui::{self, widgets::Spinner, Checkbox, DragValue};

use crate::{config::consts::MAX_WORKERS, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let idle = !app.running;

    ui.horizontal(|ui| {
        ui.label("Origin:");
        ui.add_enabled(
            idle,
            egui::TextEdit::singleline(&mut app.state.origin_text).desired_width(100.0),
        );

        ui.label("Workers:");
        ui.add_enabled(idle, DragValue::new(&mut app.state.workers).range(1..=MAX_WORKERS));

        ui.add_enabled(idle, Checkbox::new(&mut app.state.legacy_destination, "Legacy destination"))
            .on_hover_text("Query \"{stadium}{club}\" with no separator, as older runs did");

        ui.separator();

        // Fetch
        let red = egui::Color32::from_rgb(220, 30, 30);
        let button_fetch = ui.add_enabled(
            idle && app.api_key.is_some(),
            egui::Button::new(egui::RichText::new("FETCH").color(egui::Color32::BLACK).strong())
                .fill(red),
        );
        if button_fetch.clicked() {
            actions::fetch(app, ui.ctx());
        }

        if app.running {
            ui.add(Spinner::new().size(16.0));
        }

        // Copy
        let has_rows = !app.controller.points().is_empty();
        if ui.add_enabled(has_rows, egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }
        ui.checkbox(&mut app.state.copy_headers, "Include headers");
    });

    ui.horizontal(|ui| {
        ui.label("Basemap:");
        ui.add(
            egui::TextEdit::singleline(&mut app.state.basemap_path_text)
                .hint_text("built-in (GeoJSON path to override)")
                .font(egui::TextStyle::Monospace),
        );
        if ui.button("Load").clicked() {
            actions::load_basemap(app);
        }
        if ui.add_enabled(app.controller.highlight().is_some(), egui::Button::new("Clear selection")).clicked() {
            app.controller.clear();
        }
    });

    ui.label(app.status_text());
}
