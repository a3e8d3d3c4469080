// src/gui/actions/basemap.rs
use std::path::Path;

use crate::{gui::app::App, map::Basemap};

/// Load the basemap named in the text field; an empty field restores the built-in outline.
pub fn load_basemap(app: &mut App) {
    let text = app.state.basemap_path_text.trim().to_string();
    let loaded = if text.is_empty() {
        Basemap::embedded()
    } else {
        Basemap::load(Path::new(&text))
    };

    match loaded {
        Ok(map) => {
            let n = map.shapes.0.len();
            app.basemap = map;
            app.status(format!("Basemap loaded ({n} polygons)"));
        }
        Err(e) => {
            log::error!("Basemap: {e}");
            app.status(format!("Basemap error: {e}"));
        }
    }
}
