// src/gui/actions/fetch.rs
use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    config::{consts::API_KEY_ENV, DestinationStyle, RunOptions},
    gui::{app::App, progress::GuiProgress},
    pipeline,
};

/// Start a pipeline run on a background thread. Results are picked up by `poll_fetch`.
pub fn fetch(app: &mut App, ui_ctx: &egui::Context) {
    if app.running {
        return;
    }
    let Some(key) = app.api_key.clone() else {
        app.status(format!("Set {API_KEY_ENV} to enable fetching"));
        return;
    };

    let origin = app.state.origin_text.trim();
    if origin.is_empty() {
        app.status("Origin is empty");
        return;
    }

    let style = if app.state.legacy_destination {
        DestinationStyle::Concatenated
    } else {
        DestinationStyle::Separated
    };
    let opts = RunOptions::new(key)
        .with_origin(origin)
        .with_workers(app.state.workers)
        .with_destination_style(style);

    log::info!("Fetch: Begin origin={} workers={} style={:?}", opts.origin, opts.workers(), style);

    let (tx, rx) = mpsc::channel();
    let mut prog = GuiProgress::new(app.status.clone(), ui_ctx.clone());
    let ctx = ui_ctx.clone();

    thread::spawn(move || {
        // → This is where the scrape happens ←
        let res = pipeline::run(&opts, Some(&mut prog));
        let _ = tx.send(res);
        ctx.request_repaint();
    });

    app.pending = Some(rx);
    app.running = true;
}

/// Called every frame; applies a finished run once.
pub fn poll_fetch(app: &mut App) {
    let msg = match app.pending.as_ref() {
        Some(rx) => rx.try_recv(),
        None => return,
    };

    match msg {
        Ok(Ok(report)) => app.apply_report(report),
        Ok(Err(e)) => {
            log::error!("Fetch: {e}");
            app.status(format!("Error: {e}"));
        }
        Err(TryRecvError::Empty) => return,
        Err(TryRecvError::Disconnected) => {
            log::error!("Fetch: worker thread ended without a result");
            app.status("Error: fetch stopped unexpectedly");
        }
    }
    app.pending = None;
    app.running = false;
}
