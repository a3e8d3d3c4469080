// src/pipeline.rs
//
// scrape → geocode → join, once, top to bottom.
//
// Geocoding runs on a bounded worker pool (1 worker = strictly sequential).
// Workers pull row indices from a shared cursor and report through a channel;
// results are re-sorted by row index before the stadium table is built, so
// the output never depends on the worker count or on network timing.

use std::{
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use crate::{
    config::{consts::{DEFAULT_ORIGIN_LAT, DEFAULT_ORIGIN_LNG}, DestinationStyle, RunOptions},
    core::net,
    data::{inner_join, to_map_points, ClubStadiumRecord, EnrichedStadium, Failure, JoinedRecord, MapPoint, StadiumTable},
    error::Result,
    geocode::{destination_query, extract, plus_encode, Directions, Extracted, GoogleDirections, LatLng},
    progress::Progress,
    specs,
};

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct RunReport {
    pub clubs: Vec<ClubStadiumRecord>,
    pub joined: Vec<JoinedRecord>,
    pub failures: Vec<Failure>,
    /// Geocoded origin, or the configured fallback when no route reported one.
    pub origin: LatLng,
}

impl RunReport {
    pub fn map_points(&self) -> Vec<MapPoint> {
        to_map_points(&self.joined)
    }

    /// Human-readable "Stadium (Club): reason" lines for every skipped row.
    pub fn failure_lines(&self) -> Vec<String> {
        self.failures
            .iter()
            .map(|f| format!("{} ({}): {}", f.stadium, f.club, f.error))
            .collect()
    }
}

pub struct Enrichment {
    pub stadiums: StadiumTable,
    pub failures: Vec<Failure>,
    pub origin: Option<LatLng>,
}

/// Full run against the live page and the Google Directions API.
pub fn run(opts: &RunOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunReport> {
    let agent = net::agent();

    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching club table…");
    }
    let clubs = match specs::clubs::fetch(&agent, &opts.source_url) {
        Ok(c) => c,
        Err(e) => {
            log::error!("Clubs: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.finish();
            }
            return Err(e);
        }
    };

    let directions = GoogleDirections::new(agent, opts.endpoint.clone(), opts.api_key.clone());
    Ok(run_with(clubs, &directions, opts, progress))
}

/// Geocode and join an already-scraped club table.
pub fn run_with(
    clubs: Vec<ClubStadiumRecord>,
    directions: &dyn Directions,
    opts: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> RunReport {
    let Enrichment { stadiums, mut failures, origin } = enrich_stadiums(&clubs, directions, opts, progress);
    let joined = inner_join(&clubs, &stadiums);

    // A shared ground geocoded through another club is not a failure.
    failures.retain(|f| {
        let resolved = stadiums.get(&f.stadium).is_some();
        if resolved {
            log::info!("Geocode: {} ({}) resolved via shared ground", f.stadium, f.club);
        }
        !resolved
    });

    log::info!(
        "Run: {} clubs, {} stadiums geocoded, {} joined, {} skipped",
        clubs.len(),
        stadiums.len(),
        joined.len(),
        failures.len()
    );

    RunReport {
        clubs,
        joined,
        failures,
        origin: origin.unwrap_or(LatLng { lat: DEFAULT_ORIGIN_LAT, lng: DEFAULT_ORIGIN_LNG }),
    }
}

type Outcome = Result<(Extracted, Option<LatLng>)>;

fn enrich_one(
    record: &ClubStadiumRecord,
    origin: &str,
    style: DestinationStyle,
    directions: &dyn Directions,
) -> Outcome {
    let destination = destination_query(&record.stadium, &record.club, style);
    log::info!("Geocode: {} ({})", record.stadium, record.club);
    let result = directions.route(origin, &destination)?;
    let extracted = extract(&result)?;
    Ok((extracted, result.start_location()))
}

/// Geocode every row. Failures are logged and collected; they never stop the run.
pub fn enrich_stadiums(
    clubs: &[ClubStadiumRecord],
    directions: &dyn Directions,
    opts: &RunOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Enrichment {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(clubs.len());
    }

    let origin = plus_encode(&opts.origin);
    let style = opts.destination_style;
    let pause = Duration::from_millis(opts.pause_ms);
    let workers = opts.workers().min(clubs.len()).max(1);

    let cursor = AtomicUsize::new(0);
    let mut outcomes: Vec<(usize, Outcome)> = Vec::with_capacity(clubs.len());

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<(usize, Outcome)>();

        for _ in 0..workers {
            let tx = tx.clone();
            let cursor = &cursor;
            let origin = origin.as_str();
            scope.spawn(move || {
                loop {
                    let i = cursor.fetch_add(1, Ordering::Relaxed);
                    if i >= clubs.len() {
                        break;
                    }
                    let outcome = enrich_one(&clubs[i], origin, style, directions);
                    if tx.send((i, outcome)).is_err() {
                        break;
                    }
                    if !pause.is_zero() {
                        thread::sleep(pause); // be polite
                    }
                }
            });
        }
        drop(tx); // main thread is sole receiver now

        for (i, outcome) in rx {
            let stadium = clubs[i].stadium.as_str();
            match &outcome {
                Ok(_) => {
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_done(i, stadium);
                    }
                }
                Err(e) => {
                    log::warn!("Geocode: skipping {} ({}): {e}", stadium, clubs[i].club);
                    if let Some(p) = progress.as_deref_mut() {
                        p.item_failed(i, stadium, e);
                    }
                }
            }
            outcomes.push((i, outcome));
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    // Rebuild in table order.
    outcomes.sort_by_key(|(i, _)| *i);

    let mut stadiums = StadiumTable::new();
    let mut failures = Vec::new();
    let mut origin_coord = None;

    for (i, outcome) in outcomes {
        let record = &clubs[i];
        match outcome {
            Ok((e, start)) => {
                if origin_coord.is_none() {
                    origin_coord = start;
                }
                stadiums.insert(EnrichedStadium {
                    stadium: record.stadium.clone(),
                    distance_km: e.distance_km,
                    latitude: e.latitude,
                    longitude: e.longitude,
                });
            }
            Err(error) => failures.push(Failure {
                index: i,
                club: record.club.clone(),
                stadium: record.stadium.clone(),
                error,
            }),
        }
    }

    Enrichment { stadiums, failures, origin: origin_coord }
}
