// Timeline settings module
// Knobs for the day-view timeline; persisted by the host app, not here

use serde::{Deserialize, Serialize};

/// Baseline vertical scale: 60 px per hour at zoom 1.0.
pub const BASE_PIXELS_PER_MINUTE: f32 = 1.0;

/// Zoom bounds applied before deriving the pixel scale.
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

/// Configuration for timeline layout and gestures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineSettings {
    /// Zoom factor against the 60 px/hour baseline; clamped to [0.5, 3.0]
    /// when converted to a pixel scale.
    pub zoom: f32,
    /// Minute granularity dragged/resized times are floored to.
    pub snap_interval_minutes: u32,
    /// Body drags shorter than this are discarded as accidental.
    pub min_commit_distance_px: f32,
    /// Sustained press duration required to enter edit mode.
    pub min_hold_ms: u64,
    /// Horizontal gap between side-by-side columns.
    pub horizontal_padding: f32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            snap_interval_minutes: 10,
            min_commit_distance_px: 5.0,
            min_hold_ms: 300,
            horizontal_padding: 2.0,
        }
    }
}

impl TimelineSettings {
    /// Vertical scale in pixels per minute, with the zoom clamp applied.
    pub fn pixels_per_minute(&self) -> f32 {
        self.zoom.clamp(MIN_ZOOM, MAX_ZOOM) * BASE_PIXELS_PER_MINUTE
    }
}
