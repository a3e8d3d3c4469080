// src/data.rs
//
// Records flowing through one pipeline run.
//
// - ClubStadiumRecord: one row of the scraped table.
// - StadiumTable: stadium name -> EnrichedStadium, built in iteration order.
// - JoinedRecord: inner join of the two on stadium name.
// - MapPoint: a JoinedRecord with its point geometry, for rendering.

use std::collections::HashMap;

use geo::Point;

use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClubStadiumRecord {
    pub club: String,
    pub stadium: String,
}

impl ClubStadiumRecord {
    pub fn new(club: impl Into<String>, stadium: impl Into<String>) -> Self {
        Self { club: club.into(), stadium: stadium.into() }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedStadium {
    pub stadium: String,
    pub distance_km: u64,
    pub latitude: f64,
    pub longitude: f64,
}

/// Stadium name -> enrichment. Insertion order is kept; re-inserting a
/// stadium replaces its entry in place.
#[derive(Clone, Debug, Default)]
pub struct StadiumTable {
    entries: Vec<EnrichedStadium>,
    index: HashMap<String, usize>,
}

impl StadiumTable {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, stadium: EnrichedStadium) {
        match self.index.get(&stadium.stadium) {
            Some(&i) => self.entries[i] = stadium,
            None => {
                self.index.insert(stadium.stadium.clone(), self.entries.len());
                self.entries.push(stadium);
            }
        }
    }

    pub fn get(&self, stadium: &str) -> Option<&EnrichedStadium> {
        self.index.get(stadium).map(|&i| &self.entries[i])
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = &EnrichedStadium> {
        self.entries.iter()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JoinedRecord {
    pub club: String,
    pub stadium: String,
    pub distance_km: u64,
    pub latitude: f64,
    pub longitude: f64,
}

impl JoinedRecord {
    pub const HEADERS: [&'static str; 5] = ["Club", "Stadium", "Distance (km)", "Latitude", "Longitude"];

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.club.clone(),
            self.stadium.clone(),
            self.distance_km.to_string(),
            format!("{:.6}", self.latitude),
            format!("{:.6}", self.longitude),
        ]
    }
}

/// Inner join on stadium name. Output follows `clubs` order; clubs whose
/// stadium was never enriched are dropped, as are unused enrichments.
pub fn inner_join(clubs: &[ClubStadiumRecord], stadiums: &StadiumTable) -> Vec<JoinedRecord> {
    clubs
        .iter()
        .filter_map(|c| {
            stadiums.get(&c.stadium).map(|s| JoinedRecord {
                club: c.club.clone(),
                stadium: c.stadium.clone(),
                distance_km: s.distance_km,
                latitude: s.latitude,
                longitude: s.longitude,
            })
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct MapPoint {
    pub record: JoinedRecord,
    pub geometry: Point<f64>,
}

impl From<JoinedRecord> for MapPoint {
    fn from(record: JoinedRecord) -> Self {
        let geometry = Point::new(record.longitude, record.latitude);
        Self { record, geometry }
    }
}

pub fn to_map_points(joined: &[JoinedRecord]) -> Vec<MapPoint> {
    joined.iter().cloned().map(MapPoint::from).collect()
}

/// A stadium whose enrichment failed.
#[derive(Debug)]
pub struct Failure {
    /// Row position in the scraped table.
    pub index: usize,
    pub club: String,
    pub stadium: String,
    pub error: Error,
}
