// src/gui/progress.rs
use std::sync::{Arc, Mutex};

use eframe::egui;

use crate::error::Error;
use crate::progress::Progress;

/// Progress sink for the background fetch: writes the shared status line and
/// wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    done: usize,
    failed: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, done: 0, failed: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Geocoding {total} stadiums…"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(msg);
    }
    fn item_done(&mut self, _index: usize, stadium: &str) {
        self.done += 1;
        self.set_status(format!("Geocoded {} ({}/{})", stadium, self.done + self.failed, self.total));
    }
    fn item_failed(&mut self, _index: usize, stadium: &str, _error: &Error) {
        self.failed += 1;
        self.set_status(format!("Skipped {} ({}/{})", stadium, self.done + self.failed, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status("Fetch finished");
        } else {
            self.set_status(format!(
                "Fetch finished ({} geocoded, {} skipped)",
                self.done, self.failed
            ));
        }
    }
}
