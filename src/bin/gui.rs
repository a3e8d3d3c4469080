// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use away_days::{gui, logging::{init_logging, LogTarget}};
use eframe::egui::{IconData, ViewportBuilder};
use image::{Rgba, RgbaImage};

/// Red map pin on a transparent background, drawn in memory.
fn app_icon() -> IconData {
    const SIZE: u32 = 64;
    let c = SIZE as f32 / 2.0;
    let rgba = RgbaImage::from_fn(SIZE, SIZE, |x, y| {
        let d = ((x as f32 + 0.5 - c).powi(2) + (y as f32 + 0.5 - c).powi(2)).sqrt();
        if d < c * 0.35 {
            Rgba([255, 255, 255, 255])
        } else if d < c * 0.9 {
            Rgba([220, 30, 30, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    init_logging(LogTarget::File);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        log::error!("GUI failed: {e}");
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
