//! Error types for position-space construction and queries.

use std::fmt;

/// Errors raised by calculator construction and non-looping distance queries.
///
/// Unreachable targets are not errors: directional distance queries report
/// them as `f32::INFINITY` and callers check the sentinel explicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionError {
    /// Construction parameters describe an unusable position space.
    InvalidConfiguration { reason: &'static str },
    /// A non-looping distance query started from a position outside the
    /// permitted over-scroll range.
    OutOfBounds { position: f32, min: f32, max: f32 },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::InvalidConfiguration { reason } => {
                write!(f, "invalid configuration: {reason}")
            }
            PositionError::OutOfBounds { position, min, max } => {
                write!(f, "position {position} outside [{min}, {max}]")
            }
        }
    }
}

impl std::error::Error for PositionError {}
