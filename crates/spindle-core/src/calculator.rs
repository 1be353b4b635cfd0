//! Position normalization and distance queries over a fixed slot space.
//!
//! A carousel feeds fractional scroll offsets into a calculator and asks
//! which way, and how far, to travel toward a target slot. Looping spaces
//! wrap positions modulo the slot count; non-looping spaces saturate with a
//! small over-scroll tolerance for elastic bounce effects.

use crate::config::LoopConfig;
use crate::direction::Direction;
use crate::error::PositionError;

/// Pure position arithmetic over a fixed-length slot space.
///
/// Holds no mutable state; every method is a function of its explicit
/// inputs. Independent calculators (one per carousel) need no
/// synchronization.
#[derive(Clone, Copy, Debug)]
pub struct PositionCalculator {
    length: usize,
    looping: bool,
    allowed_over_scroll: f32,
}

impl PositionCalculator {
    /// Creates a calculator, validating the configuration.
    pub fn new(config: LoopConfig) -> Result<Self, PositionError> {
        config.validate()?;
        Ok(Self {
            length: config.length,
            looping: config.looping,
            allowed_over_scroll: config.allowed_over_scroll,
        })
    }

    /// Number of discrete slots.
    #[inline]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Whether the position space wraps.
    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Smallest admissible non-looping position.
    #[inline]
    pub fn min_position(&self) -> f32 {
        -self.allowed_over_scroll
    }

    /// Largest admissible non-looping position.
    #[inline]
    pub fn max_position(&self) -> f32 {
        self.allowed_over_scroll + self.length_f() - 1.0
    }

    #[inline]
    fn length_f(&self) -> f32 {
        self.length as f32
    }

    /// Maps an arbitrary position into the calculator's slot space.
    ///
    /// Looping spaces wrap modulo the slot count, preserving the fractional
    /// part; non-looping spaces saturate at the over-scroll bounds.
    ///
    /// Wrapping a negative exact multiple of the length yields `length`
    /// itself rather than `0` (with `length = 5`, `-5.0` corrects to
    /// `5.0`). The distance queries account for this boundary value.
    pub fn corrected_position(&self, position: f32) -> f32 {
        let position = finite_or_zero(position);
        if !self.looping {
            return position.clamp(self.min_position(), self.max_position());
        }
        let length = self.length_f();
        if position >= length {
            position % length
        } else if position < 0.0 {
            length - (position.abs() % length)
        } else {
            position
        }
    }

    /// `position` rounded to the nearest integer slot.
    #[inline]
    pub fn nearest_slot(position: f32) -> f32 {
        position + Self::slot_offset(position)
    }

    /// Signed distance from `position` to the nearest integer slot.
    ///
    /// Rounds half away from zero (`f32::round`), so `slot_offset(45.5)`
    /// is `0.5` and `slot_offset(45.2)` is `-0.2`.
    #[inline]
    pub fn slot_offset(position: f32) -> f32 {
        position.round() - position
    }

    /// Whether `position` lies inside the admissible non-looping range.
    pub fn contains(&self, position: f32) -> bool {
        position >= self.min_position() && position <= self.max_position()
    }

    /// Distance traveled strictly in `direction` from `position` until
    /// `target` is reached, in corrected position space.
    ///
    /// Returns `f32::INFINITY` when travel in `direction` can never reach
    /// the target (non-looping spaces only); callers check the sentinel
    /// instead of an error. Errors when a non-looping `position` lies
    /// outside the over-scroll range.
    pub fn distance_directional(
        &self,
        position: f32,
        target: f32,
        direction: Direction,
    ) -> Result<f32, PositionError> {
        // Backward travel from A to B is forward travel from B to A.
        // Shortest-distance symmetry relies on this exact reduction.
        if direction == Direction::Backward {
            return self.distance_directional(target, position, Direction::Forward);
        }

        if !self.looping && !self.contains(position) {
            return Err(PositionError::OutOfBounds {
                position,
                min: self.min_position(),
                max: self.max_position(),
            });
        }

        let position = self.corrected_position(position);
        let target = self.corrected_position(target);
        let distance = target - position;
        if distance >= 0.0 {
            return Ok(distance);
        }
        if !self.looping {
            // Target is behind and there is no wraparound.
            return Ok(f32::INFINITY);
        }
        Ok(self.length_f() - (position.abs() % self.length_f()) + target)
    }

    /// Distance traveling forward from `position` to `target`.
    pub fn distance_forward(&self, position: f32, target: f32) -> Result<f32, PositionError> {
        self.distance_directional(position, target, Direction::Forward)
    }

    /// Distance traveling backward from `position` to `target`.
    pub fn distance_backward(&self, position: f32, target: f32) -> Result<f32, PositionError> {
        self.distance_directional(position, target, Direction::Backward)
    }

    /// Shortest distance to `target` in either direction.
    pub fn distance(&self, position: f32, target: f32) -> Result<f32, PositionError> {
        let forward = self.distance_forward(position, target)?;
        let backward = self.distance_backward(position, target)?;
        Ok(forward.min(backward))
    }

    /// Direction of the shorter path to `target`.
    ///
    /// Ties, notably a target exactly half the loop away, resolve
    /// backward: forward wins only a strictly shorter path.
    pub fn best_direction(&self, position: f32, target: f32) -> Result<Direction, PositionError> {
        let forward = self.distance_forward(position, target)?;
        let backward = self.distance_backward(position, target)?;
        if forward < backward {
            Ok(Direction::Forward)
        } else {
            Ok(Direction::Backward)
        }
    }
}

/// NaN and infinities carry no usable position; fall back to the origin.
fn finite_or_zero(position: f32) -> f32 {
    if position.is_finite() {
        position
    } else {
        log::warn!("non-finite position {}; treating as 0.0", position);
        0.0
    }
}
