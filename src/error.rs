//! Global error handling for dirextract
//!
//! Only failures that abort a run live here. Unreadable files and
//! directories that cannot be listed are recovered inline as placeholders
//! in the report and never reach this type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Global error type for dirextract operations
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Root path is missing or is not a directory
    #[error("{0} is not a valid directory")]
    InvalidRoot(String),

    /// Report could not be persisted to the chosen destination
    #[error("Failed to save output to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for dirextract operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Creates an ExtractError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::ExtractError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

impl From<ExtractError> for io::Error {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::Io(e) => e,
            ExtractError::InvalidRoot(root) => io::Error::new(
                io::ErrorKind::NotFound,
                ExtractError::InvalidRoot(root).to_string(),
            ),
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_root(is_dir: bool) -> Result<()> {
        ensure!(is_dir, InvalidRoot, "{}", "missing/dir");
        Ok(())
    }

    #[test]
    fn test_ensure_produces_invalid_root() {
        assert!(check_root(true).is_ok());

        let err = check_root(false).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidRoot(_)));
        assert_eq!(err.to_string(), "missing/dir is not a valid directory");
    }

    #[test]
    fn test_invalid_root_maps_to_not_found() {
        let io_err: io::Error = ExtractError::InvalidRoot("x".into()).into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
