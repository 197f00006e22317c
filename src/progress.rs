// src/progress.rs
use std::path::Path;

/// Progress reporting for a run. The CLI logs; tests can record.
pub trait Progress {
    /// Called at the start with the number of sites.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One site's report was written to `path`.
    fn item_done(&mut self, _site_id: &str, _path: &Path) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
