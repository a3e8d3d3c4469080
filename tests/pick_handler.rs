// tests/pick_handler.rs
use away_days::config::consts::{DEFAULT_TITLE, INFO_BOX_ANCHOR, PICK_RADIUS_PX};
use away_days::data::{to_map_points, JoinedRecord};
use away_days::map::{MapController, PickEvent, Projection};
use eframe::egui::{pos2, vec2, Rect as ScreenRect};
use geo::{Coord, Point, Rect};

fn joined(club: &str, stadium: &str, km: u64, lat: f64, lng: f64) -> JoinedRecord {
    JoinedRecord {
        club: club.into(),
        stadium: stadium.into(),
        distance_km: km,
        latitude: lat,
        longitude: lng,
    }
}

fn controller() -> MapController {
    let rows = vec![
        joined("Nottingham Forest", "City Ground", 3, 52.94, -1.13),
        joined("Derby County", "Pride Park", 15, 52.915, -1.447),
        joined("Norwich City", "Carrow Road", 190, 52.622, 1.309),
    ];
    MapController::new(to_map_points(&rows), Point::new(-1.15, 52.95))
}

fn projection() -> Projection {
    let bounds = Rect::new(Coord { x: -8.0, y: 50.0 }, Coord { x: 2.0, y: 56.0 });
    Projection::fit(bounds, ScreenRect::from_min_size(pos2(0.0, 0.0), vec2(600.0, 600.0)), 10.0)
}

#[test]
fn pick_shows_info_box_and_title() {
    let mut map = controller();
    assert!(map.on_pick(&PickEvent { ind: vec![1] }));

    let info = map.annotation().unwrap();
    assert_eq!(info.text, "Club: Derby County\nStadium: Pride Park\nDistance Away: 15km");
    assert_eq!(info.anchor, Point::new(INFO_BOX_ANCHOR.0, INFO_BOX_ANCHOR.1));
    assert_eq!(
        map.title(),
        "You selected Derby County and their stadium: Pride Park. It is 15km away"
    );
    let hl = map.highlight().unwrap();
    assert_eq!(hl.index, 1);
    assert_eq!(hl.at, Point::new(-1.447, 52.915));
}

#[test]
fn repeated_picks_keep_a_single_selection() {
    let mut map = controller();
    for i in [0, 2, 1, 1, 0] {
        assert!(map.on_pick(&PickEvent { ind: vec![i] }));
    }
    assert_eq!(map.highlight().map(|h| h.index), Some(0));
    assert!(map.annotation().unwrap().text.starts_with("Club: Nottingham Forest\n"));
    assert_eq!(map.selected().unwrap().record.stadium, "City Ground");
}

#[test]
fn first_index_wins_when_points_overlap() {
    let mut map = controller();
    map.on_pick(&PickEvent { ind: vec![2, 0] });
    assert_eq!(map.highlight().map(|h| h.index), Some(2));
}

#[test]
fn empty_or_out_of_range_pick_is_ignored() {
    let mut map = controller();
    map.on_pick(&PickEvent { ind: vec![0] });

    assert!(!map.on_pick(&PickEvent { ind: vec![] }));
    assert!(!map.on_pick(&PickEvent { ind: vec![7] }));
    assert_eq!(map.highlight().map(|h| h.index), Some(0));
    assert!(map.title().contains("Nottingham Forest"));
}

#[test]
fn clear_restores_default_title() {
    let mut map = controller();
    map.on_pick(&PickEvent { ind: vec![2] });
    map.clear();
    assert!(map.annotation().is_none());
    assert!(map.highlight().is_none());
    assert_eq!(map.title(), DEFAULT_TITLE);
}

#[test]
fn pick_uses_pixel_radius() {
    let map = controller();
    let proj = projection();
    let norwich = proj.to_screen(1.309, 52.622);

    let hit = map.pick(norwich + vec2(3.0, 0.0), &proj, PICK_RADIUS_PX).unwrap();
    assert_eq!(hit.ind, vec![2]);

    assert!(map.pick(norwich + vec2(PICK_RADIUS_PX + 1.0, 0.0), &proj, PICK_RADIUS_PX).is_none());
}

#[test]
fn nearby_points_come_back_nearest_first() {
    let map = controller();
    let proj = projection();
    let forest = proj.to_screen(-1.13, 52.94);
    let derby = proj.to_screen(-1.447, 52.915);
    let gap = forest.distance(derby);

    // Cursor slightly closer to Derby, radius wide enough for both.
    let cursor = derby + (forest - derby) * 0.4;
    let hit = map.pick(cursor, &proj, gap).unwrap();
    assert_eq!(hit.ind, vec![1, 0]);
}

#[test]
fn new_dataset_drops_selection() {
    let mut map = controller();
    map.on_pick(&PickEvent { ind: vec![0] });
    map.set_points(Vec::new(), Point::new(0.0, 0.0));
    assert!(map.highlight().is_none());
    assert!(map.points().is_empty());
    assert!(!map.on_pick(&PickEvent { ind: vec![0] }));
}
