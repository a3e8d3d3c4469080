// src/progress.rs
use crate::error::Error;

/// Lightweight progress reporting for a pipeline run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once the club table is known, with the number of stadiums to geocode.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One stadium geocoded. `index` is its row in the club table.
    fn item_done(&mut self, _index: usize, _stadium: &str) {}

    /// One stadium skipped.
    fn item_failed(&mut self, _index: usize, _stadium: &str, _error: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
