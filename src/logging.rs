// src/logging.rs
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::{Builder, Env, Target};

use crate::config::consts::{LOG_FILE, STORE_DIR};

static START: OnceLock<Instant> = OnceLock::new();

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    /// Terminal (CLI).
    Stderr,
    /// `.store/debug.log` with elapsed-time stamps (GUI has no console).
    File,
}

pub fn log_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(LOG_FILE)
}

/// Install the global logger. Default filter `info`, overridable with `RUST_LOG`.
/// Calling it twice is harmless.
pub fn init_logging(target: LogTarget) {
    start();
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));

    match target {
        LogTarget::Stderr => {
            builder.format_timestamp_secs().format_module_path(false);
        }
        LogTarget::File => {
            let file = fs::create_dir_all(STORE_DIR)
                .and_then(|_| OpenOptions::new().create(true).append(true).open(log_path()));
            match file {
                Ok(f) => {
                    builder
                        .target(Target::Pipe(Box::new(f)))
                        .format(|buf, record| {
                            let elapsed = fmt_elapsed(start().elapsed().as_millis());
                            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
                        });
                }
                // Fall back to stderr rather than losing logs.
                Err(_) => {
                    builder.format_timestamp_secs().format_module_path(false);
                }
            }
        }
    }

    let _ = builder.try_init();
}
