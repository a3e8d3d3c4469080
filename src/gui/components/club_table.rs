// src/gui/components/club_table.rs
//
// Left panel: mapped clubs, one row per map point. Clicking a row goes
// through the same selection path as clicking its marker.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{gui::app::App, map::PickEvent};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Clubs");

    if !app.failures.is_empty() {
        egui::CollapsingHeader::new(format!("Not geocoded ({})", app.failures.len()))
            .id_salt("failures")
            .show(ui, |ui| {
                for line in &app.failures {
                    ui.label(egui::RichText::new(line.as_str()).small());
                }
            });
    }

    ui.separator();

    let selected = app.controller.highlight().map(|h| h.index);
    let points = app.controller.points();
    let mut clicked: Option<usize> = None;

    TableBuilder::new(ui)
        .striped(true)
        .sense(egui::Sense::click())
        .column(Column::auto().at_least(140.0).clip(true))
        .column(Column::remainder().at_least(120.0).clip(true))
        .column(Column::auto().at_least(60.0))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("Club"); });
            header.col(|ui| { ui.strong("Stadium"); });
            header.col(|ui| { ui.strong("Distance"); });
        })
        .body(|body| {
            body.rows(18.0, points.len(), |mut row| {
                let i = row.index();
                let r = &points[i].record;
                row.set_selected(selected == Some(i));
                row.col(|ui| { ui.label(r.club.as_str()); });
                row.col(|ui| { ui.label(r.stadium.as_str()); });
                row.col(|ui| { ui.label(format!("{} km", r.distance_km)); });
                if row.response().clicked() {
                    clicked = Some(i);
                }
            });
        });

    if let Some(i) = clicked {
        app.controller.on_pick(&PickEvent { ind: vec![i] });
    }
}
