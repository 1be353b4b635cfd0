//! Motion tuning constants for carousel flings and snapping.
//!
//! Tuning lives here so every carousel built on these planners updates
//! consistently.

/// Kinetic decay defaults for slot-space flings.
pub mod fling {
    /// Exponential decay time constant after release, in milliseconds.
    pub const DECAY_TAU_MS: f32 = 240.0;
    /// Velocity (slots/sec) below which a release does not count as a
    /// fling and the carousel settles on the nearest slot instead.
    pub const MIN_FLING_VELOCITY: f32 = 0.5;
    /// Maximum velocity (slots/sec) a fling is allowed to carry.
    pub const MAX_FLING_VELOCITY: f32 = 20.0;
}

/// Snap/tween defaults.
pub mod snap {
    /// Duration (ms) for settling onto an adjacent slot.
    pub const SLOT_DURATION_MS: u64 = 180;
    /// Duration (ms) for settling across more than one slot.
    pub const PAGE_DURATION_MS: u64 = 240;
    /// Within this fraction of a slot from a boundary, skip the tween.
    pub const SNAP_EPSILON_FRACTION: f32 = 0.06;
}
