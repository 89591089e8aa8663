//! TraceLens Analysis
//!
//! Derives reports from a loaded animation record:
//! - **Summary:** Metadata overview, first/last tile, estimated duration
//! - **Path:** Hand travel distance and bounding box of motion
//! - **Sequence:** Simplified `{frame, position, tile}` projection for export
//!
//! This crate is pure computation: no I/O, no console output.
//! All inputs are data; all outputs are data.

pub mod path;
pub mod sequence;
pub mod summary;

pub use path::{analyze_path, BoundingBox, DistanceStats, PathReport};
pub use sequence::{collect_sequence, export_sequence, SequenceEntry};
pub use summary::{summarize, SummaryReport};
