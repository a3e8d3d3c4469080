// tests/pipeline_e2e.rs
use std::collections::HashMap;
use std::sync::Mutex;

use away_days::config::consts::{DEFAULT_ORIGIN_LAT, DEFAULT_ORIGIN_LNG};
use away_days::config::{ApiKey, DestinationStyle, RunOptions};
use away_days::data::ClubStadiumRecord;
use away_days::geocode::route::{Leg, Location, Quantity, Route};
use away_days::geocode::{Directions, LatLng, RouteResult};
use away_days::pipeline::run_with;
use away_days::progress::Progress;
use away_days::{Error, Result};

/// Canned directions keyed by the encoded destination. Unknown destinations
/// answer ZERO_RESULTS like the real service.
struct MockDirections {
    routes: HashMap<String, (u64, f64, f64)>,
    seen: Mutex<Vec<(String, String)>>,
}

impl MockDirections {
    fn new(entries: &[(&str, u64, f64, f64)]) -> Self {
        Self {
            routes: entries.iter().map(|(d, m, lat, lng)| (d.to_string(), (*m, *lat, *lng))).collect(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

fn loc(lat: f64, lng: f64) -> Option<Location> {
    Some(Location { lat: Some(lat), lng: Some(lng) })
}

impl Directions for MockDirections {
    fn route(&self, origin: &str, destination: &str) -> Result<RouteResult> {
        self.seen.lock().unwrap().push((origin.to_string(), destination.to_string()));
        let Some(&(meters, lat, lng)) = self.routes.get(destination) else {
            return Ok(RouteResult { status: Some("ZERO_RESULTS".into()), ..Default::default() });
        };
        Ok(RouteResult {
            status: Some("OK".into()),
            error_message: None,
            routes: vec![Route {
                legs: vec![Leg {
                    distance: Some(Quantity { value: Some(meters) }),
                    start_location: loc(52.95, -1.15),
                    end_location: loc(lat, lng),
                }],
            }],
        })
    }
}

fn clubs() -> Vec<ClubStadiumRecord> {
    vec![
        ClubStadiumRecord::new("Nottingham Forest", "City Ground"),
        ClubStadiumRecord::new("Atlantis FC", "Sunken Stadium"),
        ClubStadiumRecord::new("Derby County", "Pride Park"),
    ]
}

fn mock() -> MockDirections {
    MockDirections::new(&[
        ("City+Ground,+Nottingham+Forest", 3000, 52.94, -1.13),
        ("Pride+Park,+Derby+County", 15000, 52.915, -1.447),
    ])
}

fn opts(workers: usize) -> RunOptions {
    RunOptions::new(ApiKey::new("test-key")).with_workers(workers).with_pause_ms(0)
}

#[test]
fn joins_geocoded_stadiums_and_skips_failures() {
    let directions = mock();
    let report = run_with(clubs(), &directions, &opts(1), None);

    assert_eq!(report.joined.len(), 2);
    let forest = &report.joined[0];
    assert_eq!(forest.club, "Nottingham Forest");
    assert_eq!(forest.stadium, "City Ground");
    assert_eq!(forest.distance_km, 3);
    assert_eq!((forest.latitude, forest.longitude), (52.94, -1.13));

    let derby = &report.joined[1];
    assert_eq!(derby.club, "Derby County");
    assert_eq!(derby.distance_km, 15);

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].stadium, "Sunken Stadium");
    assert_eq!(report.failures[0].index, 1);
    assert!(matches!(report.failures[0].error, Error::Geocode(_)));
    assert_eq!(
        report.failure_lines(),
        vec![s("Sunken Stadium (Atlantis FC): Geocode failed: no routes (ZERO_RESULTS)")]
    );

    assert_eq!(report.origin, LatLng { lat: 52.95, lng: -1.15 });
}

#[test]
fn origin_and_destination_are_query_encoded() {
    let directions = mock();
    let o = opts(1).with_origin("NG1 3AA");
    run_with(clubs(), &directions, &o, None);

    let seen = directions.seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|(origin, _)| origin == "NG1+3AA"));
    assert_eq!(seen[0].1, "City+Ground,+Nottingham+Forest");
}

#[test]
fn legacy_destination_drops_the_separator() {
    let directions = MockDirections::new(&[("City+GroundNottingham+Forest", 1, 52.94, -1.13)]);
    let o = opts(1).with_destination_style(DestinationStyle::Concatenated);
    let report = run_with(clubs(), &directions, &o, None);

    assert_eq!(report.joined.len(), 1);
    // 1 m rounds up to a whole kilometre
    assert_eq!(report.joined[0].distance_km, 1);
}

#[test]
fn output_order_does_not_depend_on_worker_count() {
    let many: Vec<ClubStadiumRecord> = (0..24)
        .map(|i| ClubStadiumRecord::new(format!("Club {i}"), format!("Ground {i}")))
        .collect();
    let entries: Vec<(String, u64, f64, f64)> = (0..24)
        .filter(|i| i % 5 != 0)
        .map(|i| (format!("Ground+{i},+Club+{i}"), 1000 * i as u64, 50.0 + i as f64 / 10.0, -1.0))
        .collect();
    let refs: Vec<(&str, u64, f64, f64)> = entries.iter().map(|(d, m, a, b)| (d.as_str(), *m, *a, *b)).collect();

    let seq = run_with(many.clone(), &MockDirections::new(&refs), &opts(1), None);
    let par = run_with(many, &MockDirections::new(&refs), &opts(4), None);

    assert_eq!(seq.joined, par.joined);
    let seq_failed: Vec<usize> = seq.failures.iter().map(|f| f.index).collect();
    let par_failed: Vec<usize> = par.failures.iter().map(|f| f.index).collect();
    assert_eq!(seq_failed, vec![0, 5, 10, 15, 20]);
    assert_eq!(seq_failed, par_failed);
}

#[test]
fn shared_ground_geocoded_once_is_not_reported_as_failed() {
    let clubs = vec![
        ClubStadiumRecord::new("Fulham Reserves", "Craven Cottage"),
        ClubStadiumRecord::new("Fulham", "Craven Cottage"),
    ];
    let directions = MockDirections::new(&[("Craven+Cottage,+Fulham", 180_000, 51.475, -0.222)]);
    let report = run_with(clubs, &directions, &opts(1), None);

    let joined: Vec<&str> = report.joined.iter().map(|j| j.club.as_str()).collect();
    assert_eq!(joined, vec!["Fulham Reserves", "Fulham"]);
    assert!(report.joined.iter().all(|j| j.distance_km == 180));
    assert!(report.failures.is_empty(), "{:?}", report.failure_lines());
}

#[test]
fn nothing_geocoded_falls_back_to_default_origin() {
    let directions = MockDirections::new(&[]);
    let report = run_with(clubs(), &directions, &opts(2), None);
    assert!(report.joined.is_empty());
    assert_eq!(report.failures.len(), 3);
    assert_eq!(report.origin, LatLng { lat: DEFAULT_ORIGIN_LAT, lng: DEFAULT_ORIGIN_LNG });
}

#[derive(Default)]
struct Recorder {
    total: usize,
    done: Vec<usize>,
    failed: Vec<usize>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn item_done(&mut self, index: usize, _stadium: &str) { self.done.push(index); }
    fn item_failed(&mut self, index: usize, _stadium: &str, _error: &Error) { self.failed.push(index); }
    fn finish(&mut self) { self.finished = true; }
}

#[test]
fn progress_sees_every_row() {
    let directions = mock();
    let mut rec = Recorder::default();
    run_with(clubs(), &directions, &opts(1), Some(&mut rec));
    assert_eq!(rec.total, 3);
    assert_eq!(rec.done, vec![0, 2]);
    assert_eq!(rec.failed, vec![1]);
    assert!(rec.finished);
}

fn s(v: &str) -> String {
    v.to_string()
}
