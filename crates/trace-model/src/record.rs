//! Animation record types.
//!
//! A record is produced once by the loader and never mutated afterwards.
//! Field names mirror the exported trace document exactly.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A complete recorded drawing animation (`animation.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRecord {
    /// Canvas and recording parameters.
    pub metadata: Metadata,

    /// The recorded drawing sequence.
    pub animation: Animation,
}

/// Recording parameters captured alongside the frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Canvas dimensions in pixels.
    pub width: u32,
    pub height: u32,

    /// Nominal frames per second. Always positive once loaded.
    pub frame_rate: f64,

    /// Grid cell size in pixels.
    pub split_len: u32,

    /// How many objects were skipped between rendered frames.
    pub object_skip_rate: u32,

    /// Frame count declared by the recorder. Not guaranteed to match
    /// the number of frames actually written.
    pub total_frames: u64,

    /// Size of the drawing hand's bounding region.
    pub hand_dimensions: HandDimensions,
}

/// Width and height of the drawing tool image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HandDimensions {
    pub width: u32,
    pub height: u32,
}

/// Container for the frame sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Frames in temporal order.
    pub frames_written: Vec<Frame>,
}

/// One recorded instant of the drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame index; non-decreasing but possibly sparse.
    pub frame_number: u64,

    /// Where the hand was at this frame.
    pub hand_position: HandPosition,

    /// The tile that was drawn at this frame.
    pub tile_drawn: TileDrawn,
}

/// Pixel coordinate of the drawing hand.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HandPosition {
    pub x: f64,
    pub y: f64,
}

/// Tile information attached to a frame.
///
/// The recorder may attach more fields; only the grid position is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileDrawn {
    pub grid_position: GridPosition,
}

/// `[column, row]` of a cell in the drawing grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition(pub [i64; 2]);

impl AnimationRecord {
    /// Build a record from metadata and an ordered frame list.
    pub fn new(metadata: Metadata, frames: Vec<Frame>) -> Self {
        Self {
            metadata,
            animation: Animation {
                frames_written: frames,
            },
        }
    }

    /// The recorded frames in temporal order.
    pub fn frames(&self) -> &[Frame] {
        &self.animation.frames_written
    }

    /// Number of adjacent frame pairs whose `frame_number` goes backwards.
    pub fn out_of_order_frames(&self) -> usize {
        self.frames()
            .windows(2)
            .filter(|pair| pair[1].frame_number < pair[0].frame_number)
            .count()
    }
}

impl Metadata {
    /// Create metadata for a canvas with the given size and frame rate.
    ///
    /// Remaining parameters start at neutral values (1px grid, no skipping,
    /// zero declared frames, zero-sized hand).
    pub fn new(width: u32, height: u32, frame_rate: f64) -> Self {
        Self {
            width,
            height,
            frame_rate,
            split_len: 1,
            object_skip_rate: 0,
            total_frames: 0,
            hand_dimensions: HandDimensions::default(),
        }
    }
}

impl Frame {
    /// Create a frame at `(x, y)` that drew tile `[col, row]`.
    pub fn new(frame_number: u64, x: f64, y: f64, col: i64, row: i64) -> Self {
        Self {
            frame_number,
            hand_position: HandPosition { x, y },
            tile_drawn: TileDrawn {
                grid_position: GridPosition([col, row]),
            },
        }
    }
}

impl HandPosition {
    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &HandPosition) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

impl GridPosition {
    pub fn col(&self) -> i64 {
        self.0[0]
    }

    pub fn row(&self) -> i64 {
        self.0[1]
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.col(), self.row())
    }
}

impl fmt::Display for HandDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_is_euclidean() {
        let a = HandPosition { x: 0.0, y: 0.0 };
        let b = HandPosition { x: 3.0, y: 4.0 };
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_grid_position_serializes_as_pair() {
        let json = serde_json::to_string(&GridPosition([3, 7])).unwrap();
        assert_eq!(json, "[3,7]");
        let parsed: GridPosition = serde_json::from_str("[3, 7]").unwrap();
        assert_eq!(parsed.col(), 3);
        assert_eq!(parsed.row(), 7);
        assert_eq!(parsed.to_string(), "[3, 7]");
    }

    #[test]
    fn test_grid_position_rejects_wrong_arity() {
        assert!(serde_json::from_str::<GridPosition>("[1]").is_err());
        assert!(serde_json::from_str::<GridPosition>("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_out_of_order_frames_counts_regressions() {
        let record = AnimationRecord::new(
            Metadata::new(100, 100, 30.0),
            vec![
                Frame::new(0, 0.0, 0.0, 0, 0),
                Frame::new(2, 1.0, 1.0, 0, 0),
                Frame::new(2, 2.0, 2.0, 0, 0),
                Frame::new(1, 3.0, 3.0, 0, 0),
                Frame::new(5, 4.0, 4.0, 0, 0),
            ],
        );
        assert_eq!(record.out_of_order_frames(), 1);
    }

    #[test]
    fn test_empty_record_has_no_frames() {
        let record = AnimationRecord::new(Metadata::new(10, 10, 24.0), vec![]);
        assert!(record.frames().is_empty());
        assert_eq!(record.out_of_order_frames(), 0);
    }

    #[test]
    fn test_record_serialization_keeps_wire_shape() {
        let record = AnimationRecord::new(
            Metadata::new(640, 480, 30.0),
            vec![Frame::new(4, 1.5, 2.5, 1, 0)],
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["metadata"]["hand_dimensions"]["width"], 0);
        assert_eq!(
            value["animation"]["frames_written"][0]["tile_drawn"]["grid_position"],
            serde_json::json!([1, 0])
        );
        assert_eq!(
            value["animation"]["frames_written"][0]["hand_position"]["x"],
            1.5
        );
    }
}
