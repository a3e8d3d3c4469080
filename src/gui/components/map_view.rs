// src/gui/components/map_view.rs
//
// Draws the map and routes clicks into the controller's pick handler.
// Pure view: every piece of state it shows lives in `MapController`.

use eframe::egui::{
    self, Color32, CornerRadius, CursorIcon, FontId, Mesh, Rect, Sense, Shape, Stroke,
};

use crate::{
    config::consts::PICK_RADIUS_PX,
    gui::app::App,
    map::{union_bounds, Projection},
};

const SEA: Color32 = Color32::from_rgb(236, 242, 248);
const COAST: Color32 = Color32::from_rgb(25, 80, 130);
const MARKER_RADIUS: f32 = 4.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading(app.controller.title());

    let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
    let rect = response.rect;
    painter.rect_filled(rect, CornerRadius::ZERO, SEA);

    let origin = app.controller.origin();
    let coords = app
        .controller
        .points()
        .iter()
        .map(|p| p.geometry.0)
        .chain(std::iter::once(origin.0));
    let Some(bounds) = union_bounds(app.basemap.bounds(), coords) else {
        return;
    };
    let proj = Projection::fit(bounds, rect, 16.0);

    // Basemap, alpha 0.8
    let land = Color32::from_rgba_unmultiplied(31, 119, 180, 204);
    let mut mesh = Mesh::default();
    for t in app.basemap.triangles() {
        let base = mesh.vertices.len() as u32;
        for c in t.to_array() {
            mesh.colored_vertex(proj.coord_to_screen(c), land);
        }
        mesh.add_triangle(base, base + 1, base + 2);
    }
    painter.add(Shape::mesh(mesh));
    for poly in app.basemap.shapes.0.iter() {
        let ring = poly.exterior().coords().map(|c| proj.coord_to_screen(*c)).collect();
        painter.add(Shape::closed_line(ring, Stroke::new(1.0, COAST)));
    }

    // Stadiums
    for p in app.controller.points() {
        let at = proj.to_screen(p.geometry.x(), p.geometry.y());
        painter.circle_filled(at, MARKER_RADIUS, Color32::RED);
    }

    // Origin
    painter.circle_filled(proj.to_screen(origin.x(), origin.y()), MARKER_RADIUS + 1.0, Color32::BLACK);

    // Selection
    if let Some(h) = app.controller.highlight() {
        let at = proj.to_screen(h.at.x(), h.at.y());
        painter.circle_filled(at, MARKER_RADIUS + 2.0, Color32::YELLOW);
        painter.circle_stroke(at, MARKER_RADIUS + 2.0, Stroke::new(1.0, Color32::BLACK));
    }

    if let Some(info) = app.controller.annotation() {
        let at = proj.to_screen(info.anchor.x(), info.anchor.y());
        let galley = painter.layout_no_wrap(info.text.clone(), FontId::proportional(13.0), Color32::BLACK);
        let bg = Rect::from_min_size(at, galley.size()).expand(5.0);
        painter.rect_filled(bg, CornerRadius::same(3), Color32::from_rgba_unmultiplied(0, 0, 255, 128));
        painter.galley(at, galley, Color32::BLACK);
    }

    if let Some(hover) = response.hover_pos() {
        if app.controller.pick(hover, &proj, PICK_RADIUS_PX).is_some() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            if let Some(event) = app.controller.pick(pos, &proj, PICK_RADIUS_PX) {
                app.controller.on_pick(&event);
            }
        }
    }
}
