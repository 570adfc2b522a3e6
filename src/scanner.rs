/*!
 * Single-level directory listing
 */

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::types::{Entry, EntryKind};
use crate::utils::is_hidden;

/// List the immediate children of `dir`, sorted by file name.
///
/// Hidden entries are dropped unless `include_hidden` is set. Any failure
/// to read the directory (permission or otherwise) is returned as an error
/// so callers can substitute a placeholder for the whole listing.
pub fn list_directory(dir: &Path, include_hidden: bool) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for result in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = result.map_err(io::Error::from)?;
        let name = entry.file_name().to_string_lossy().to_string();

        if !include_hidden && is_hidden(&name) {
            continue;
        }

        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        entries.push(Entry {
            name,
            path: entry.into_path(),
            kind,
        });
    }

    Ok(entries)
}
