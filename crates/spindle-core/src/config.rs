//! Calculator configuration.

use crate::error::PositionError;

/// Default over-scroll tolerance past either end in non-looping mode.
///
/// A tenth of a slot gives a visible elastic bounce without revealing a
/// second out-of-range item.
pub const DEFAULT_OVER_SCROLL: f32 = 0.1;

/// Configuration for a position calculator.
///
/// A calculator is constructed once with a fixed configuration for the
/// lifetime of the carousel it serves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopConfig {
    /// Number of discrete slots in the logical array. Must be at least 1.
    pub length: usize,

    /// Whether the position space wraps modulo `length`.
    pub looping: bool,

    /// How far past `[0, length - 1]` a non-looping position may go before
    /// it saturates.
    pub allowed_over_scroll: f32,
}

impl LoopConfig {
    /// Creates a looping configuration with the default over-scroll.
    pub fn new(length: usize) -> Self {
        Self {
            length,
            looping: true,
            allowed_over_scroll: DEFAULT_OVER_SCROLL,
        }
    }

    /// Disables wrapping; positions saturate at the ends instead.
    pub fn without_looping(mut self) -> Self {
        self.looping = false;
        self
    }

    /// Overrides the over-scroll tolerance.
    pub fn with_over_scroll(mut self, allowed_over_scroll: f32) -> Self {
        self.allowed_over_scroll = allowed_over_scroll;
        self
    }

    pub(crate) fn validate(&self) -> Result<(), PositionError> {
        if self.length < 1 {
            return Err(PositionError::InvalidConfiguration {
                reason: "length must be at least 1",
            });
        }
        // `>=` is false for NaN, which must be rejected too.
        if !(self.allowed_over_scroll >= 0.0) {
            return Err(PositionError::InvalidConfiguration {
                reason: "allowed_over_scroll must be non-negative",
            });
        }
        Ok(())
    }
}
