// src/map/mod.rs
//! Map model: basemap layer, screen projection and the pick controller.
//! Drawing lives in `gui::components::map_view`.

pub mod basemap;
pub mod controller;
pub mod projection;

pub use basemap::Basemap;
pub use controller::{Highlight, InfoBox, MapController, PickEvent};
pub use projection::{union_bounds, Projection};
