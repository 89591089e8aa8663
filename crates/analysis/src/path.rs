//! Hand travel statistics: distance covered and area of motion.
//!
//! Both statistics come from a single pass over the frame sequence.
//! Coordinates are taken from `hand_position`, never from the drawn tile.

use serde::Serialize;
use tracelens_trace_model::record::{AnimationRecord, HandPosition};

/// Movement statistics for a recording.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    /// Number of frames that contributed to the distance statistics.
    /// Zero when there are fewer than two frames.
    pub frames_analyzed: usize,

    /// Travel distance; `None` with fewer than two frames.
    pub distance: Option<DistanceStats>,

    /// Area covered by the hand; `None` for an empty trace.
    pub bounds: Option<BoundingBox>,
}

/// Inter-frame travel distance in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceStats {
    /// Sum of all consecutive Euclidean steps.
    pub total: f64,
    /// `total / (frames - 1)`.
    pub average: f64,
    /// Longest single step.
    pub max_step: f64,
}

/// Axis-aligned rectangle containing every hand position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub max_x: f64,
    pub x_extent: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub y_extent: f64,
}

impl BoundingBox {
    /// Whether a point lies inside the box (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// Running min/max while scanning positions.
#[derive(Debug, Clone, Copy)]
struct Extremes {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Extremes {
    fn at(p: &HandPosition) -> Self {
        Self {
            min_x: p.x,
            max_x: p.x,
            min_y: p.y,
            max_y: p.y,
        }
    }

    fn include(&mut self, p: &HandPosition) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    fn finish(self) -> BoundingBox {
        BoundingBox {
            min_x: self.min_x,
            max_x: self.max_x,
            x_extent: self.max_x - self.min_x,
            min_y: self.min_y,
            max_y: self.max_y,
            y_extent: self.max_y - self.min_y,
        }
    }
}

/// Compute travel distance and bounding box for a record.
pub fn analyze_path(record: &AnimationRecord) -> PathReport {
    let frames = record.frames();

    let mut extremes: Option<Extremes> = None;
    let mut previous: Option<&HandPosition> = None;
    let mut total = 0.0_f64;
    let mut max_step = 0.0_f64;

    for frame in frames {
        let pos = &frame.hand_position;

        match extremes.as_mut() {
            Some(e) => e.include(pos),
            None => extremes = Some(Extremes::at(pos)),
        }

        if let Some(prev) = previous {
            let step = prev.distance_to(pos);
            total += step;
            max_step = max_step.max(step);
        }
        previous = Some(pos);
    }

    // Average is over steps, so it needs at least one pair.
    let distance = (frames.len() >= 2).then(|| DistanceStats {
        total,
        average: total / (frames.len() - 1) as f64,
        max_step,
    });
    let frames_analyzed = if distance.is_some() { frames.len() } else { 0 };

    tracing::debug!(
        frames = frames.len(),
        total_distance = total,
        "analyzed drawing path"
    );

    PathReport {
        frames_analyzed,
        distance,
        bounds: extremes.map(Extremes::finish),
    }
}
