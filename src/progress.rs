//! Progress reporting for traversal
//!
//! The walker is decoupled from any particular UI: it emits events through
//! [`ProgressObserver`] and the caller decides what, if anything, to render.

use std::path::Path;

/// Observer invoked with traversal progress events.
///
/// All methods have empty default bodies so implementors only override the
/// events they care about.
pub trait ProgressObserver {
    /// A directory is about to be listed.
    fn directory_entered(&mut self, _path: &Path) {}

    /// A file entry was recorded; `total` is the running count.
    fn file_counted(&mut self, _total: usize) {}

    /// Traversal completed with the given summary counters.
    fn finished(&mut self, _files_found: usize, _bytes_read: u64) {}
}

/// Observer that ignores every event.
pub struct NoProgress;

impl ProgressObserver for NoProgress {}
