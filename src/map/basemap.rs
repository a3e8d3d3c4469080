// src/map/basemap.rs
//
// Basemap layer: country outlines as a `geo::MultiPolygon`, read from GeoJSON.
// Only Polygon/MultiPolygon geometries are kept; anything else is ignored.

use std::{fs, path::Path};

use geo::{BoundingRect, Coord, LineString, MultiPolygon, Polygon, Rect, TriangulateEarcut, Triangle};
use serde::Deserialize;

use crate::error::{Error, Result};

const EMBEDDED: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/basemap.geojson"));

type Ring = Vec<Vec<f64>>;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum GeoJson {
    FeatureCollection { features: Vec<Feature> },
    Feature { geometry: Option<Geometry> },
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

#[derive(Deserialize)]
struct Feature {
    geometry: Option<Geometry>,
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Other,
}

#[derive(Clone, Debug)]
pub struct Basemap {
    pub shapes: MultiPolygon<f64>,
    /// Fill triangles, computed once at load.
    triangles: Vec<Triangle<f64>>,
}

impl Basemap {
    /// Coarse outline of Great Britain and Ireland shipped with the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_geojson_str(EMBEDDED)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let map = Self::from_geojson_str(&text)?;
        log::info!("Basemap: {} polygons from {}", map.shapes.0.len(), path.display());
        Ok(map)
    }

    pub fn from_geojson_str(text: &str) -> Result<Self> {
        let doc: GeoJson = serde_json::from_str(text)
            .map_err(|e| Error::Parse(format!("basemap GeoJSON: {e}")))?;

        let mut polys = Vec::new();
        match doc {
            GeoJson::FeatureCollection { features } => {
                for f in features {
                    if let Some(g) = f.geometry {
                        push_geometry(&mut polys, g);
                    }
                }
            }
            GeoJson::Feature { geometry: Some(g) } => push_geometry(&mut polys, g),
            GeoJson::Feature { geometry: None } => {}
            GeoJson::Polygon { coordinates } => polys.extend(polygon(coordinates)),
            GeoJson::MultiPolygon { coordinates } => {
                polys.extend(coordinates.into_iter().filter_map(polygon))
            }
        }

        if polys.is_empty() {
            return Err(Error::Parse(s!("basemap has no polygons")));
        }
        Ok(Self::from_shapes(MultiPolygon::new(polys)))
    }

    pub fn from_shapes(shapes: MultiPolygon<f64>) -> Self {
        let triangles = shapes.0.iter().flat_map(|p| p.earcut_triangles()).collect();
        Self { shapes, triangles }
    }

    pub fn triangles(&self) -> &[Triangle<f64>] {
        &self.triangles
    }

    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.shapes.bounding_rect()
    }
}

fn push_geometry(out: &mut Vec<Polygon<f64>>, g: Geometry) {
    match g {
        Geometry::Polygon { coordinates } => out.extend(polygon(coordinates)),
        Geometry::MultiPolygon { coordinates } => out.extend(coordinates.into_iter().filter_map(polygon)),
        Geometry::Other => {}
    }
}

/// First ring is the exterior, the rest are holes. Positions keep lon/lat and
/// drop any altitude.
fn polygon(rings: Vec<Ring>) -> Option<Polygon<f64>> {
    let mut rings = rings.into_iter().map(|ring| {
        LineString::new(
            ring.into_iter()
                .filter(|p| p.len() >= 2)
                .map(|p| Coord { x: p[0], y: p[1] })
                .collect(),
        )
    });
    let exterior = rings.next()?;
    if exterior.0.len() < 3 {
        return None;
    }
    Some(Polygon::new(exterior, rings.collect()))
}
