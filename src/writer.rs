/*!
 * Report output for dirextract
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::{ExtractError, Result};

/// Writes a finished report to its destination
pub struct ReportWriter {
    /// Writer configuration
    config: Config,
}

impl ReportWriter {
    /// Create a new report writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the report to the configured file, or stdout when none is set
    pub fn write(&self, text: &str) -> Result<()> {
        match &self.config.output_file {
            Some(path) => write_to_file(path, text),
            None => write_to_stdout(text),
        }
    }
}

/// Persist `text` to `path`, truncating any existing file
pub fn write_to_file(path: &Path, text: &str) -> Result<()> {
    let to_error = |source: io::Error| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(to_error)?;
    writer.flush().map_err(to_error)?;

    info!(path = %path.display(), bytes = text.len(), "report saved");
    Ok(())
}

/// Print `text` on stdout followed by a newline
pub fn write_to_stdout(text: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    handle.write_all(b"\n")?;
    handle.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_write_to_file_roundtrips_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.txt");

        let mut config = Config::new(dir.path());
        config.output_file = Some(path.clone());
        ReportWriter::new(config).write("DIRECTORY STRUCTURE :\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "DIRECTORY STRUCTURE :\n");
    }

    #[test]
    fn test_write_to_missing_directory_is_output_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.txt");

        let err = write_to_file(&path, "text").unwrap_err();
        match err {
            ExtractError::OutputWrite { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {}", other),
        }
    }
}
