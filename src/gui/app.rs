// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc, Arc, Mutex},
    time::Duration,
};

use eframe::egui;
use geo::Point;

use crate::{
    config::{consts::*, ApiKey},
    error::Result,
    map::{Basemap, MapController},
    pipeline::RunReport,
};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> std::result::Result<(), Box<dyn Error>> {
    let basemap = Basemap::embedded()?;
    eframe::run_native(
        DEFAULT_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(basemap, ApiKey::from_env().ok())))),
    )?;
    Ok(())
}

/// User-editable inputs of the next fetch.
#[derive(Clone, Debug)]
pub struct GuiState {
    pub origin_text: String,
    pub workers: usize,
    pub legacy_destination: bool,
    pub basemap_path_text: String,
    pub copy_headers: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            origin_text: s!(DEFAULT_ORIGIN),
            workers: DEFAULT_WORKERS,
            legacy_destination: false,
            basemap_path_text: s!(),
            copy_headers: true,
        }
    }
}

pub struct App {
    pub state: GuiState,
    pub api_key: Option<ApiKey>,

    pub basemap: Basemap,
    // single source of truth for what the map and the club table show
    pub controller: MapController,
    pub failures: Vec<String>,

    // status/progress (worker writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<mpsc::Receiver<Result<RunReport>>>,
}

impl App {
    pub fn new(basemap: Basemap, api_key: Option<ApiKey>) -> Self {
        let status = if api_key.is_some() {
            s!("Idle")
        } else {
            log::warn!("Init: {API_KEY_ENV} not set; fetching disabled");
            format!("Set {API_KEY_ENV} to enable fetching")
        };
        log::info!("Init: basemap polygons={}", basemap.shapes.0.len());

        Self {
            state: GuiState::default(),
            api_key,
            basemap,
            controller: MapController::new(
                Vec::new(),
                Point::new(DEFAULT_ORIGIN_LNG, DEFAULT_ORIGIN_LAT),
            ),
            failures: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            pending: None,
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Replace map/table contents with a finished run.
    pub fn apply_report(&mut self, report: RunReport) {
        let origin = Point::new(report.origin.lng, report.origin.lat);
        self.controller.set_points(report.map_points(), origin);
        self.failures = report.failure_lines();

        let msg = format!(
            "Mapped {} of {} clubs ({} skipped)",
            report.joined.len(),
            report.clubs.len(),
            report.failures.len()
        );
        log::info!("Fetch: {msg}");
        self.status(msg);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_fetch(self);
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            components::controls::draw(ui, self);
        });

        egui::SidePanel::left("clubs")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                components::club_table::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::map_view::draw(ui, self);
        });
    }
}
