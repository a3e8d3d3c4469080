// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::{self, ExportFormat}, data::JoinedRecord, gui::app::App};

/// Copy the mapped clubs as TSV (pastes straight into a spreadsheet).
pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let rows: Vec<JoinedRecord> = app
        .controller
        .points()
        .iter()
        .map(|p| p.record.clone())
        .collect();

    if rows.is_empty() {
        app.status("Nothing to copy");
        log::debug!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = csv::to_export_string(&rows, app.state.copy_headers, ExportFormat::Tsv);
    log::info!("Copy: rows={}, headers={}", rows.len(), app.state.copy_headers);

    ui_ctx.copy_text(txt);
    app.status("Copied to clipboard");
}
