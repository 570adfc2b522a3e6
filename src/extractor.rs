/*!
 * Directory tree rendering and file content extraction
 *
 * A report has three parts, always in this order: a header naming the
 * root, an indented tree of the root, and a files section holding the
 * full text of every file. The files section re-lists every directory
 * itself rather than reusing the tree, and both parts apply the same
 * hidden-entry filter.
 */

use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::scanner::list_directory;
use crate::types::{
    ExtractStatistics, Extraction, FILES_HEADER, INDENT, PERMISSION_DENIED, SEPARATOR,
    STRUCTURE_HEADER, UNREADABLE_CONTENT,
};

/// Walks a root directory and produces the text report
pub struct Extractor {
    /// Extractor configuration
    config: Config,
    /// Progress bar, advanced once per file block
    progress: Arc<ProgressBar>,
}

impl Extractor {
    /// Create a new extractor
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Build the full report for the configured root
    pub fn run(&self) -> Result<Extraction> {
        self.config.validate()?;

        let root = self.config.target_dir.as_path();
        info!(
            root = %root.display(),
            include_hidden = self.config.include_hidden,
            "extracting directory"
        );

        let mut text = format!("{}\n{}\n\n", STRUCTURE_HEADER, root.display());
        self.render_tree_into(root, 0, &mut text);
        text.push_str(&format!("\n{}\n{}\n", FILES_HEADER, SEPARATOR));

        let mut statistics = ExtractStatistics::default();
        self.write_files(root, &mut text, &mut statistics);

        info!(
            files = statistics.files_processed(),
            unreadable = statistics.unreadable_files.len(),
            denied = statistics.directories_denied,
            "extraction finished"
        );

        Ok(Extraction { text, statistics })
    }

    /// Render the tree of `dir` with its own line indented `depth` levels
    pub fn render_tree(&self, dir: &Path, depth: usize) -> String {
        let mut out = String::new();
        self.render_tree_into(dir, depth, &mut out);
        out
    }

    fn render_tree_into(&self, dir: &Path, depth: usize, out: &mut String) {
        let indent = INDENT.repeat(depth);
        out.push_str(&format!("{}{}/\n", indent, display_name(dir)));

        let entries = match list_directory(dir, self.config.include_hidden) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot list directory");
                out.push_str(&format!("{}{}{}\n", indent, INDENT, PERMISSION_DENIED));
                return;
            }
        };

        for entry in entries {
            if entry.is_dir() {
                self.render_tree_into(&entry.path, depth + 1, out);
            } else {
                out.push_str(&format!("{}{}{}\n", indent, INDENT, entry.name));
            }
        }
    }

    /// Append a block per file under `dir`: its own files first, then each
    /// subdirectory in turn
    fn write_files(&self, dir: &Path, out: &mut String, stats: &mut ExtractStatistics) {
        debug!(dir = %dir.display(), "collecting file contents");

        let entries = match list_directory(dir, self.config.include_hidden) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot list directory");
                stats.directories_denied += 1;
                push_block(out, &format!("{}/", display_name(dir)), PERMISSION_DENIED);
                return;
            }
        };

        let (dirs, files): (Vec<_>, Vec<_>) = entries.into_iter().partition(|e| e.is_dir());

        for file in files {
            self.update_progress(&file.name);

            match read_file_content(&file.path) {
                Some(content) => {
                    stats.files_read += 1;
                    stats.total_lines += content.lines().count();
                    stats.total_chars += content.chars().count();
                    push_block(out, &file.name, &content);
                }
                None => {
                    stats.unreadable_files.push(file.path);
                    push_block(out, &file.name, UNREADABLE_CONTENT);
                }
            }
        }

        for sub in dirs {
            self.write_files(&sub.path, out, stats);
        }
    }

    fn update_progress(&self, file_name: &str) {
        self.progress.inc(1);

        // Keep long names from wrapping the bar
        let display_name = if file_name.chars().count() > 40 {
            let tail: String = file_name
                .chars()
                .rev()
                .take(37)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{}", tail)
        } else {
            file_name.to_string()
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));
    }
}

/// Render the tree section for `path` without a header
pub fn render_tree(path: &Path, include_hidden: bool, depth: usize) -> String {
    let config = Config::new(path).with_hidden(include_hidden);
    Extractor::new(config, Arc::new(ProgressBar::hidden())).render_tree(path, depth)
}

/// Produce the full report for `path`.
///
/// Fails with `InvalidRoot` before any traversal if `path` is not a
/// directory. Unreadable files and directories become placeholders.
pub fn extract(path: &Path, include_hidden: bool) -> Result<String> {
    let config = Config::new(path).with_hidden(include_hidden);
    let extractor = Extractor::new(config, Arc::new(ProgressBar::hidden()));
    Ok(extractor.run()?.text)
}

/// Last path component, or the path as written when there is none
fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => path
            .to_string_lossy()
            .trim_end_matches('/')
            .to_string(),
    }
}

/// Whole file as UTF-8 text, or None when it cannot be read or decoded
fn read_file_content(path: &Path) -> Option<String> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(file = %path.display(), error = %e, "cannot read file");
            return None;
        }
    };

    match String::from_utf8(bytes) {
        Ok(content) => Some(content),
        Err(_) => {
            debug!(file = %path.display(), "file is not valid UTF-8");
            None
        }
    }
}

fn push_block(out: &mut String, name: &str, body: &str) {
    out.push_str(&format!("{}:\n\n{}\n{}\n", name, body, SEPARATOR));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/tmp/project")), "project");
        assert_eq!(display_name(Path::new("project/")), "project");
        assert_eq!(display_name(Path::new(".")), ".");
        assert_eq!(display_name(&PathBuf::from("..")), "..");
    }

    #[test]
    fn test_push_block_format() {
        let mut out = String::new();
        push_block(&mut out, "a.txt", "hello");
        assert_eq!(out, "a.txt:\n\nhello\n____\n");
    }

    #[test]
    fn test_read_file_content_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x9f]).unwrap();
        assert_eq!(read_file_content(&path), None);

        fs::write(&path, "plain").unwrap();
        assert_eq!(read_file_content(&path).as_deref(), Some("plain"));
    }

    #[test]
    fn test_read_file_content_on_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_file_content(dir.path()), None);
    }

    #[test]
    fn test_render_tree_indents_nested_levels() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("top");
        fs::create_dir_all(root.join("mid").join("low")).unwrap();
        fs::write(root.join("mid").join("low").join("deep.txt"), "d").unwrap();

        let tree = render_tree(&root, false, 1);
        assert_eq!(tree, "  top/\n    mid/\n      low/\n        deep.txt\n");
    }
}
