// src/map/projection.rs
use eframe::egui::{Pos2, Rect as ScreenRect};
use geo::{Coord, Rect};

/// Equirectangular lon/lat → screen mapping, with longitude scaled by
/// cos(mid-latitude) so shapes keep their aspect at UK latitudes.
/// Screen y grows downwards, latitude upwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    /// Data-space origin (min lon, max lat) → screen `offset`.
    west: f64,
    north: f64,
    kx: f64,
    scale: f64,
    offset: Pos2,
}

impl Projection {
    /// Fit `bounds` into `screen`, centred, leaving `margin` px on every side.
    pub fn fit(bounds: Rect<f64>, screen: ScreenRect, margin: f32) -> Self {
        let mid_lat = (bounds.min().y + bounds.max().y) / 2.0;
        let kx = mid_lat.to_radians().cos().max(0.01);

        let data_w = (bounds.width() * kx).max(1e-9);
        let data_h = bounds.height().max(1e-9);
        let avail_w = (screen.width() - 2.0 * margin).max(1.0) as f64;
        let avail_h = (screen.height() - 2.0 * margin).max(1.0) as f64;
        let scale = (avail_w / data_w).min(avail_h / data_h);

        // Centre the unused space.
        let pad_x = (avail_w - data_w * scale) / 2.0;
        let pad_y = (avail_h - data_h * scale) / 2.0;
        let offset = Pos2::new(
            screen.min.x + margin + pad_x as f32,
            screen.min.y + margin + pad_y as f32,
        );

        Self { west: bounds.min().x, north: bounds.max().y, kx, scale, offset }
    }

    pub fn to_screen(&self, lon: f64, lat: f64) -> Pos2 {
        Pos2::new(
            self.offset.x + ((lon - self.west) * self.kx * self.scale) as f32,
            self.offset.y + ((self.north - lat) * self.scale) as f32,
        )
    }

    pub fn coord_to_screen(&self, c: Coord<f64>) -> Pos2 {
        self.to_screen(c.x, c.y)
    }
}

/// Smallest rect holding `base` and every `extra` coordinate.
pub fn union_bounds(base: Option<Rect<f64>>, extra: impl IntoIterator<Item = Coord<f64>>) -> Option<Rect<f64>> {
    let mut acc = base.map(|r| (r.min(), r.max()));
    for c in extra {
        acc = Some(match acc {
            None => (c, c),
            Some((lo, hi)) => (
                Coord { x: lo.x.min(c.x), y: lo.y.min(c.y) },
                Coord { x: hi.x.max(c.x), y: hi.y.max(c.y) },
            ),
        });
    }
    acc.map(|(lo, hi)| Rect::new(lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn uk() -> Rect<f64> {
        Rect::new(Coord { x: -10.0, y: 50.0 }, Coord { x: 2.0, y: 59.0 })
    }

    #[test]
    fn east_is_right() {
        let p = Projection::fit(uk(), ScreenRect::from_min_max(pos2(0.0, 0.0), pos2(800.0, 600.0)), 10.0);
        let west = p.to_screen(-8.0, 52.95);
        let east = p.to_screen(1.0, 52.95);
        assert!(west.x < east.x);
        assert!((west.y - east.y).abs() < 1e-3);
    }

    #[test]
    fn north_is_up_and_fits_inside() {
        let screen = ScreenRect::from_min_max(pos2(0.0, 0.0), pos2(400.0, 400.0));
        let p = Projection::fit(uk(), screen, 10.0);
        let north = p.to_screen(-4.0, 59.0);
        let south = p.to_screen(-4.0, 50.0);
        assert!(north.y < south.y);
        for (lon, lat) in [(-10.0, 50.0), (2.0, 59.0)] {
            let s = p.to_screen(lon, lat);
            assert!(screen.expand(0.5).contains(s), "{s:?} outside");
        }
    }

    #[test]
    fn union_includes_points() {
        let r = union_bounds(Some(uk()), [Coord { x: 5.0, y: 49.0 }]).unwrap();
        assert_eq!(r.min(), Coord { x: -10.0, y: 49.0 });
        assert_eq!(r.max(), Coord { x: 5.0, y: 59.0 });
        assert!(union_bounds(None, std::iter::empty()).is_none());
    }
}
