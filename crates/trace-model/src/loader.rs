//! Loading animation traces from disk.
//!
//! Parsing is eager and all-or-nothing: a document either becomes a fully
//! typed [`AnimationRecord`] or a single [`LoadError`]. No consumer ever
//! sees a partially valid record.

use std::path::{Path, PathBuf};

use serde_json::error::Category;

use crate::record::AnimationRecord;

/// Errors that can occur when loading a trace document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Trace file not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Unexpected document shape in {path}: {source}")]
    ShapeMismatch {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },
}

/// Load and validate a trace document from a file.
pub fn load_record(path: impl AsRef<Path>) -> Result<AnimationRecord, LoadError> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::SourceNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "read trace document");
    parse_record(&json, path)
}

/// Parse and validate a trace document already held in memory.
///
/// `origin` is only used to label errors.
pub fn parse_record(json: &str, origin: impl AsRef<Path>) -> Result<AnimationRecord, LoadError> {
    let record: AnimationRecord = serde_json::from_str(json).map_err(|e| {
        let path = origin.as_ref().to_path_buf();
        match e.classify() {
            Category::Data => LoadError::ShapeMismatch { path, source: e },
            Category::Syntax | Category::Eof | Category::Io => {
                LoadError::Malformed { path, source: e }
            }
        }
    })?;

    validate(&record)?;

    tracing::debug!(
        frames = record.frames().len(),
        declared = record.metadata.total_frames,
        "parsed animation record"
    );
    Ok(record)
}

/// Checks that serde cannot express on its own.
fn validate(record: &AnimationRecord) -> Result<(), LoadError> {
    let rate = record.metadata.frame_rate;
    if !rate.is_finite() || rate <= 0.0 {
        return Err(LoadError::InvalidField {
            field: "metadata.frame_rate",
            message: format!("must be a positive number, got {rate}"),
        });
    }
    Ok(())
}
