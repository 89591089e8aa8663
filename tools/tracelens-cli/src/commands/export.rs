//! Write the simplified frame sequence to disk.

use std::path::Path;

use tracelens_analysis::collect_sequence;
use tracelens_common::error::{TracelensError, TracelensResult};
use tracelens_trace_model::record::AnimationRecord;

/// Serialize the sequence as indented JSON at `output`.
///
/// Returns the number of entries written.
pub fn write_sequence(record: &AnimationRecord, output: &Path) -> TracelensResult<usize> {
    let entries = collect_sequence(record);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| TracelensError::export(output, format!("cannot create directory: {e}")))?;
    }

    let json = serde_json::to_string_pretty(&entries)?;
    std::fs::write(output, json).map_err(|e| TracelensError::export(output, e.to_string()))?;

    tracing::info!(path = %output.display(), entries = entries.len(), "exported drawing sequence");
    Ok(entries.len())
}
