//! Error types shared across TraceLens crates.

use std::path::PathBuf;

/// Top-level error type for TraceLens operations outside the loader.
#[derive(Debug, thiserror::Error)]
pub enum TracelensError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Export error at {path}: {message}")]
    Export { path: PathBuf, message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias using TracelensError.
pub type TracelensResult<T> = Result<T, TracelensError>;

impl TracelensError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn export(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Export {
            path: path.into(),
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_error_names_path() {
        let err = TracelensError::export("/tmp/out.json", "disk full");
        assert_eq!(err.to_string(), "Export error at /tmp/out.json: disk full");
    }

    #[test]
    fn test_io_errors_convert() {
        fn fails() -> TracelensResult<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(TracelensError::Io(_))));
    }
}
