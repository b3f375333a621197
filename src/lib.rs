//! Skimmer - walks a directory tree and exports per-file metadata to CSV

pub mod export;
pub mod format;
pub mod progress;
pub mod record;
pub mod walker;

pub use export::{ExportError, write_csv};
pub use format::format_size;
pub use progress::{NoProgress, ProgressObserver};
pub use record::{FileDetails, FileRecord};
pub use walker::{SkimReport, collect_records};
