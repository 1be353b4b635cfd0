//! Traversal direction over a position space.

/// Direction of travel between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward increasing positions (+1).
    Forward,
    /// Toward decreasing positions (-1).
    Backward,
}

impl Direction {
    /// Signed unit step for this direction.
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }

    /// The opposite direction.
    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// Direction matching the sign of `value`. Zero maps to forward.
    pub fn from_sign(value: f32) -> Self {
        if value < 0.0 {
            Direction::Backward
        } else {
            Direction::Forward
        }
    }
}
