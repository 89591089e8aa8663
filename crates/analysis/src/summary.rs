//! Recording summary: metadata overview and timeline boundaries.

use serde::Serialize;
use tracelens_trace_model::record::{AnimationRecord, GridPosition, HandDimensions};

/// Descriptive statistics for a recording.
///
/// Fields that need at least one frame are `None` for an empty trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Canvas resolution in pixels.
    pub width: u32,
    pub height: u32,

    /// Nominal frames per second.
    pub frame_rate: f64,

    /// Grid cell size in pixels.
    pub split_len: u32,

    pub object_skip_rate: u32,

    /// Frame count declared in the metadata.
    pub declared_frames: u64,

    pub hand_dimensions: HandDimensions,

    /// Frames actually present in the sequence.
    pub recorded_frames: usize,

    /// Grid position of the first drawn tile.
    pub first_tile: Option<GridPosition>,

    /// Grid position of the last drawn tile.
    pub last_tile: Option<GridPosition>,

    /// Estimated drawing time in seconds.
    ///
    /// This is `recorded_frames / frame_rate`: an approximation from the
    /// nominal rate, not a measurement of elapsed time between frames.
    pub estimated_duration_secs: Option<f64>,

    /// Whether `declared_frames` equals `recorded_frames`.
    pub frame_count_matches_declared: bool,

    /// Adjacent pairs where the frame number goes backwards.
    pub out_of_order_frames: usize,
}

/// Build the summary report for a record.
pub fn summarize(record: &AnimationRecord) -> SummaryReport {
    let metadata = &record.metadata;
    let frames = record.frames();

    let first_tile = frames.first().map(|f| f.tile_drawn.grid_position);
    let last_tile = frames.last().map(|f| f.tile_drawn.grid_position);
    let estimated_duration_secs =
        (!frames.is_empty()).then(|| frames.len() as f64 / metadata.frame_rate);

    tracing::debug!(
        recorded = frames.len(),
        declared = metadata.total_frames,
        duration = ?estimated_duration_secs,
        "summarized recording"
    );

    SummaryReport {
        width: metadata.width,
        height: metadata.height,
        frame_rate: metadata.frame_rate,
        split_len: metadata.split_len,
        object_skip_rate: metadata.object_skip_rate,
        declared_frames: metadata.total_frames,
        hand_dimensions: metadata.hand_dimensions,
        recorded_frames: frames.len(),
        first_tile,
        last_tile,
        estimated_duration_secs,
        frame_count_matches_declared: metadata.total_frames == frames.len() as u64,
        out_of_order_frames: record.out_of_order_frames(),
    }
}
