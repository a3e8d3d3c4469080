// src/config/consts.rs

// Source page
pub const SOURCE_URL: &str = "https://en.wikipedia.org/wiki/EFL_Championship";
pub const TABLE_SELECTOR: &str = "table.wikitable.sortable";
pub const CLUB_HEADERS: &[&str] = &["club", "team"];
pub const STADIUM_HEADERS: &[&str] = &["stadium", "ground"];

// Directions service
pub const DIRECTIONS_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/directions/json";
pub const API_KEY_ENV: &str = "DIRECTIONS_API_KEY";

// Origin: central Nottingham postcode. Fallback coords for the marker
// when no route reports a start location.
pub const DEFAULT_ORIGIN: &str = "NG13AA";
pub const DEFAULT_ORIGIN_LAT: f64 = 52.9536;
pub const DEFAULT_ORIGIN_LNG: f64 = -1.1505;

// Net config
pub const USER_AGENT: &str = concat!("away_days/", env!("CARGO_PKG_VERSION"));
pub const CONNECT_TIMEOUT_SECS: u64 = 10;
pub const READ_TIMEOUT_SECS: u64 = 20;

// Concurrency
pub const DEFAULT_WORKERS: usize = 1;
pub const MAX_WORKERS: usize = 8;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite

// Map
pub const PICK_RADIUS_PX: f32 = 5.0;
pub const INFO_BOX_ANCHOR: (f64, f64) = (-6.5, 55.0); // (lon, lat)
pub const DEFAULT_TITLE: &str = "Championship Away Days";

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
