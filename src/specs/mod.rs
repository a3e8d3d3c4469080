// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec focuses on a single page
//! and encodes *where the ground truth lives in the HTML* and *how to extract
//! it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of fetched pages (via `scraper`).
//! - **Selector choice & precedence** (e.g. header-name lookup for the club and
//!   stadium columns rather than fixed positions).
//! - **Light shaping** into domain records (`data::ClubStadiumRecord`).
//!
//! ## What does **not** live here
//! - Geocoding, joining, rendering. Specs only extract.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → pipeline::run → specs::clubs::fetch()
//!                           ↘ returns Vec<ClubStadiumRecord>
//!             geocode::*    (per stadium)
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured fixtures (`tests/fixtures`).
//! - Keep selectors resilient to whitespace, attribute order, footnote markers.
pub mod clubs;
