//! Traversal collector - walks a directory tree and builds one record per file

use std::fs;
use std::path::Path;

use crate::progress::ProgressObserver;
use crate::record::{FileDetails, FileRecord};

/// Result of a completed traversal: the full record set plus summary counters.
///
/// The summary is for the console, not the export; `bytes_read` only counts
/// files whose metadata was actually readable.
#[derive(Debug, Default)]
pub struct SkimReport {
    pub records: Vec<FileRecord>,
    pub files_found: usize,
    pub bytes_read: u64,
}

/// Walk `root` recursively and collect a [`FileRecord`] for every file entry.
///
/// Every entry found during listing yields exactly one record: a file that
/// vanishes or becomes unreadable between listing and stat produces a degraded
/// record with sentinel values rather than being dropped. Per-file failures
/// never abort the run.
///
/// Within a directory, file records are emitted before descending into
/// subdirectories; entries are visited in name order. Symlinked directories
/// are not descended. A root that does not exist or cannot be listed yields an
/// empty report.
///
/// The full record set is materialized before returning; nothing is streamed
/// to the writer.
pub fn collect_records(root: &Path, observer: &mut dyn ProgressObserver) -> SkimReport {
    let mut report = SkimReport::default();
    walk_dir(root, observer, &mut report);
    observer.finished(report.files_found, report.bytes_read);
    report
}

fn walk_dir(path: &Path, observer: &mut dyn ProgressObserver, report: &mut SkimReport) {
    observer.directory_entered(path);

    // An unlistable directory yields no records; traversal continues elsewhere.
    let entries = match fs::read_dir(path) {
        Ok(e) => e,
        Err(_) => return,
    };

    let mut entries: Vec<_> = entries.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut subdirs = Vec::new();

    for entry in entries {
        let entry_path = entry.path();

        // Skip symlinked directories to avoid cycles; everything else that is
        // not a directory (regular files, dangling symlinks, special files)
        // gets a record.
        if entry_path.is_dir() {
            if !entry_path.is_symlink() {
                subdirs.push(entry_path);
            }
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        // Stat through symlinks; a dangling one is the degraded case.
        let details = match fs::metadata(&entry_path) {
            Ok(meta) => FileDetails::from_metadata(&meta),
            Err(_) => FileDetails::Unavailable,
        };

        if let FileDetails::Read { size, .. } = details {
            report.bytes_read += size;
        }
        report.files_found += 1;
        report
            .records
            .push(FileRecord::new(name, path.to_path_buf(), details));
        observer.file_counted(report.files_found);
    }

    for subdir in subdirs {
        walk_dir(&subdir, observer, report);
    }
}
