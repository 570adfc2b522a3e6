/*!
 * Utility functions for dirextract
 */

use std::path::Path;

use walkdir::WalkDir;

/// Prefix marking a hidden file or directory
pub const HIDDEN_MARKER: char = '.';

/// Whether an entry name denotes a hidden file or directory
pub fn is_hidden(name: &str) -> bool {
    name.starts_with(HIDDEN_MARKER)
}

/// Count the file blocks an extraction of `dir` will produce.
///
/// Used to size the progress bar before the real walk. Directories that
/// cannot be read are skipped, so the count is a lower bound there.
pub fn count_files(dir: &Path, include_hidden: bool) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0 || include_hidden || !is_hidden(&e.file_name().to_string_lossy())
        })
        .filter_map(Result::ok)
        .filter(|e| e.depth() > 0 && !e.file_type().is_dir())
        .count() as u64
}

/// Format a number with human-readable units
pub fn format_number(num: usize) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}
