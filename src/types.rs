/*!
 * Core types and report format constants for dirextract
 */

use std::path::PathBuf;

/// First line of every report; the root path follows on its own line
pub const STRUCTURE_HEADER: &str = "DIRECTORY STRUCTURE :";

/// Marker opening the files section
pub const FILES_HEADER: &str = "FILES:";

/// Line terminating the files marker and every file block
pub const SEPARATOR: &str = "____";

/// One indentation level in the tree section
pub const INDENT: &str = "  ";

/// Substituted for a directory that could not be listed
pub const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Substituted for a file whose content could not be read as UTF-8 text
pub const UNREADABLE_CONTENT: &str = "[Cannot read file content]";

/// Kind of a listed directory entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A real directory; symlinks to directories are not followed
    Directory,
    /// Anything else, read as a file
    File,
}

/// A single child of a listed directory
#[derive(Debug, Clone)]
pub struct Entry {
    /// File name as displayed in the report
    pub name: String,
    /// Full path, joined onto the traversal root
    pub path: PathBuf,
    /// Directory or file
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Counters gathered while writing the files section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractStatistics {
    /// Files whose content was included
    pub files_read: usize,
    /// Paths of files replaced by the unreadable placeholder
    pub unreadable_files: Vec<PathBuf>,
    /// Directories whose listing failed
    pub directories_denied: usize,
    /// Lines across all included content
    pub total_lines: usize,
    /// Characters across all included content
    pub total_chars: usize,
}

impl ExtractStatistics {
    /// Number of file blocks written, readable or not
    pub fn files_processed(&self) -> usize {
        self.files_read + self.unreadable_files.len()
    }
}

/// Result of a full extraction run
#[derive(Debug, Clone)]
pub struct Extraction {
    /// The complete report text
    pub text: String,
    /// What happened while producing it
    pub statistics: ExtractStatistics,
}
