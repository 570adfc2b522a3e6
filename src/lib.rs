/*!
 * dirextract - Render a directory tree and concatenate file contents
 *
 * This library walks a directory and produces a single text report: an
 * indented tree of the directory followed by the full text of every file
 * it contains.
 */

pub mod config;
pub mod error;
pub mod extractor;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{ExtractError, Result};
pub use extractor::{extract, render_tree, Extractor};
pub use report::{Reporter, RunSummary};
pub use types::{Entry, EntryKind, ExtractStatistics, Extraction};
pub use writer::ReportWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
