//! Simplified frame sequence for downstream consumers.

use serde::{Deserialize, Serialize};
use tracelens_trace_model::record::{AnimationRecord, Frame, GridPosition, HandPosition};

/// One exported frame: `{frame, position: {x, y}, tile: [col, row]}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SequenceEntry {
    pub frame: u64,
    pub position: HandPosition,
    pub tile: GridPosition,
}

impl From<&Frame> for SequenceEntry {
    fn from(frame: &Frame) -> Self {
        Self {
            frame: frame.frame_number,
            position: frame.hand_position,
            tile: frame.tile_drawn.grid_position,
        }
    }
}

/// Lazily project every frame, in recorded order.
pub fn export_sequence(
    record: &AnimationRecord,
) -> impl ExactSizeIterator<Item = SequenceEntry> + '_ {
    record.frames().iter().map(SequenceEntry::from)
}

/// Eager form of [`export_sequence`].
pub fn collect_sequence(record: &AnimationRecord) -> Vec<SequenceEntry> {
    export_sequence(record).collect()
}
