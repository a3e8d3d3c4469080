// src/map/controller.rs
//
// Interactive state of the map: the dataset being shown, the title, the info
// box and the highlighted point. The pick handler takes the controller
// explicitly; nothing here reaches for ambient state.
//
// Invariant: after any pick there is at most one info box and one highlight,
// and they always refer to the same point.

use eframe::egui::Pos2;
use geo::Point;

use super::projection::Projection;
use crate::config::consts::{DEFAULT_TITLE, INFO_BOX_ANCHOR};
use crate::data::MapPoint;

/// Indices of the points under the cursor, nearest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickEvent {
    pub ind: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InfoBox {
    pub text: String,
    /// Data coordinates (lon, lat) of the box's top-left corner.
    pub anchor: Point<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub index: usize,
    pub at: Point<f64>,
}

#[derive(Clone, Debug)]
pub struct MapController {
    points: Vec<MapPoint>,
    origin: Point<f64>,
    title: String,
    annotation: Option<InfoBox>,
    highlight: Option<Highlight>,
}

impl MapController {
    pub fn new(points: Vec<MapPoint>, origin: Point<f64>) -> Self {
        Self {
            points,
            origin,
            title: s!(DEFAULT_TITLE),
            annotation: None,
            highlight: None,
        }
    }

    /// Swap in a new dataset; any selection is dropped.
    pub fn set_points(&mut self, points: Vec<MapPoint>, origin: Point<f64>) {
        self.points = points;
        self.origin = origin;
        self.clear();
    }

    pub fn points(&self) -> &[MapPoint] { &self.points }
    pub fn origin(&self) -> Point<f64> { self.origin }
    pub fn title(&self) -> &str { &self.title }
    pub fn annotation(&self) -> Option<&InfoBox> { self.annotation.as_ref() }
    pub fn highlight(&self) -> Option<Highlight> { self.highlight }

    pub fn selected(&self) -> Option<&MapPoint> {
        self.highlight.and_then(|h| self.points.get(h.index))
    }

    /// Back to the unselected state.
    pub fn clear(&mut self) {
        self.annotation = None;
        self.highlight = None;
        self.title = s!(DEFAULT_TITLE);
    }

    /// Points within `radius` px of `cursor`, nearest first. `None` when the
    /// click landed on empty map.
    pub fn pick(&self, cursor: Pos2, proj: &Projection, radius: f32) -> Option<PickEvent> {
        let mut hits: Vec<(usize, f32)> = self
            .points
            .iter()
            .enumerate()
            .filter_map(|(i, p)| {
                let d = proj.to_screen(p.geometry.x(), p.geometry.y()).distance(cursor);
                (d <= radius).then_some((i, d))
            })
            .collect();
        if hits.is_empty() {
            return None;
        }
        hits.sort_by(|a, b| a.1.total_cmp(&b.1));
        Some(PickEvent { ind: hits.into_iter().map(|(i, _)| i).collect() })
    }

    /// Pick handler. Uses the first index of the event; an empty event or an
    /// index outside the dataset leaves the state untouched.
    pub fn on_pick(&mut self, event: &PickEvent) -> bool {
        match event.ind.first() {
            Some(&i) => self.select(i),
            None => false,
        }
    }

    fn select(&mut self, index: usize) -> bool {
        let Some(point) = self.points.get(index) else {
            return false;
        };

        // Drop the previous box and highlight before drawing new ones.
        self.annotation = None;
        self.highlight = None;

        let r = &point.record;
        let distance = format!("{}km", r.distance_km);

        self.annotation = Some(InfoBox {
            text: [
                format!("Club: {}", r.club),
                format!("Stadium: {}", r.stadium),
                format!("Distance Away: {distance}"),
            ]
            .join("\n"),
            anchor: Point::new(INFO_BOX_ANCHOR.0, INFO_BOX_ANCHOR.1),
        });
        self.title = format!(
            "You selected {} and their stadium: {}. It is {} away",
            r.club, r.stadium, distance
        );
        self.highlight = Some(Highlight { index, at: point.geometry });

        log::debug!("Map: selected {} ({})", r.stadium, r.club);
        true
    }
}
