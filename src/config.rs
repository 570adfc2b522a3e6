/*!
 * Configuration handling for dirextract
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;

/// Command-line arguments for dirextract
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "dirextract",
    version = env!("CARGO_PKG_VERSION"),
    about = "Render a directory tree and concatenate every file's text into one report",
    long_about = "Walks a directory, prints an indented tree of its contents followed by the full text of every file it contains. Hidden entries are skipped unless requested."
)]
pub struct Args {
    /// Directory to extract
    #[clap(default_value = ".")]
    pub directory: String,

    /// Include hidden files and directories
    #[clap(short = 'i', long)]
    pub include_hidden: bool,

    /// Output file to save the extracted data (prints to stdout when omitted)
    #[clap(short = 'o', long, value_name = "FILE")]
    pub output: Option<String>,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Root directory to process
    pub target_dir: PathBuf,

    /// Destination for the report; stdout when None
    pub output_file: Option<PathBuf>,

    /// Whether entries starting with '.' are visited
    pub include_hidden: bool,
}

impl Config {
    /// Create a configuration for a root with default options
    pub fn new(target_dir: impl Into<PathBuf>) -> Self {
        Self {
            target_dir: target_dir.into(),
            output_file: None,
            include_hidden: false,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            target_dir: PathBuf::from(args.directory),
            output_file: args.output.map(PathBuf::from),
            include_hidden: args.include_hidden,
        }
    }

    /// Builder-style toggle for hidden entries
    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    /// Validate the configuration
    ///
    /// Only the root is checked here. A bad output path is reported after
    /// the report has been built so the text is never lost.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.target_dir.is_dir(),
            InvalidRoot,
            "{}",
            self.target_dir.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExtractError;

    #[test]
    fn test_defaults_from_args() {
        let args = Args::parse_from(["dirextract"]);
        let config = Config::from_args(args);

        assert_eq!(config.target_dir, PathBuf::from("."));
        assert_eq!(config.output_file, None);
        assert!(!config.include_hidden);
    }

    #[test]
    fn test_flags_from_args() {
        let args = Args::parse_from(["dirextract", "-i", "-o", "out.txt", "some/dir"]);
        let config = Config::from_args(args);

        assert_eq!(config.target_dir, PathBuf::from("some/dir"));
        assert_eq!(config.output_file, Some(PathBuf::from("out.txt")));
        assert!(config.include_hidden);
    }

    #[test]
    fn test_validate_rejects_regular_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = Config::new(file.path()).validate().unwrap_err();
        assert!(matches!(err, ExtractError::InvalidRoot(_)));
    }

    #[test]
    fn test_validate_rejects_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            Config::new(missing).validate(),
            Err(ExtractError::InvalidRoot(_))
        ));
    }

    #[test]
    fn test_validate_accepts_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::new(dir.path()).validate().is_ok());
    }
}
