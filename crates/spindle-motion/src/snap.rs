//! Snap planning: which slot to settle on after a release.
//!
//! Combines the position calculator with a fling projection to answer the
//! decision a carousel faces every pointer release: which integer slot to
//! land on, in which direction to travel, how far, and roughly how long
//! the settle tween should take.

use spindle_core::{Direction, PositionCalculator, PositionError};

use crate::fling::SlotFling;
use crate::motion_constants::snap;

/// Settle decision for a carousel after the pointer releases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPlan {
    /// Integer-valued slot position to settle on, in corrected space.
    pub target_slot: f32,
    /// Travel direction toward the target.
    pub direction: Direction,
    /// Directional travel from the corrected release position, in slots.
    pub travel: f32,
    /// Suggested tween duration in ms. Zero when already aligned.
    pub duration_ms: u64,
}

/// Plans snap targets from a release position and velocity.
pub struct SnapPlanner<'a> {
    calculator: &'a PositionCalculator,
    fling: SlotFling,
}

impl<'a> SnapPlanner<'a> {
    /// Creates a planner with the default fling projection.
    pub fn new(calculator: &'a PositionCalculator) -> Self {
        Self {
            calculator,
            fling: SlotFling::default(),
        }
    }

    /// Overrides the fling projection.
    pub fn with_fling(mut self, fling: SlotFling) -> Self {
        self.fling = fling;
        self
    }

    /// Plans the settle for a release at `position` with `velocity`
    /// slots/sec.
    pub fn plan(&self, position: f32, velocity: f32) -> Result<SnapPlan, PositionError> {
        let position = self.calculator.corrected_position(position);

        // Already aligned within epsilon and no meaningful fling: stay put.
        let offset = PositionCalculator::slot_offset(position);
        if offset.abs() <= snap::SNAP_EPSILON_FRACTION && !self.fling.is_fling(velocity) {
            return Ok(SnapPlan {
                target_slot: self.clamp_slot(PositionCalculator::nearest_slot(position)),
                direction: Direction::from_sign(offset),
                travel: 0.0,
                duration_ms: 0,
            });
        }

        let landing = position + self.fling.fling_distance(velocity);
        let target = self.clamp_slot(PositionCalculator::nearest_slot(
            self.calculator.corrected_position(landing),
        ));

        let mut direction = if self.fling.is_fling(velocity) {
            Direction::from_sign(velocity)
        } else {
            self.calculator.best_direction(position, target)?
        };

        let mut travel = self
            .calculator
            .distance_directional(position, target, direction)?;
        if travel.is_infinite() {
            // A clamped landing can round to a slot behind an over-scrolled
            // release; the flung direction never reaches it.
            log::warn!(
                "snap target {} unreachable going {:?}; reversing",
                target,
                direction
            );
            direction = direction.reversed();
            travel = self
                .calculator
                .distance_directional(position, target, direction)?;
        }

        let duration_ms = if travel <= 1.0 {
            snap::SLOT_DURATION_MS
        } else {
            snap::PAGE_DURATION_MS
        };

        Ok(SnapPlan {
            target_slot: target,
            direction,
            travel,
            duration_ms,
        })
    }

    /// Reduces a rounded slot into the addressable range.
    fn clamp_slot(&self, slot: f32) -> f32 {
        if self.calculator.is_looping() {
            // Rounding the corrected quirk value `length` lands exactly on
            // the loop seam; wrap it to slot 0.
            self.calculator.corrected_position(slot)
        } else {
            slot.clamp(0.0, self.calculator.length() as f32 - 1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spindle_core::LoopConfig;

    fn looping(length: usize) -> PositionCalculator {
        PositionCalculator::new(LoopConfig::new(length)).unwrap()
    }

    #[test]
    fn test_aligned_release_stays_put() {
        let calc = looping(5);
        let plan = SnapPlanner::new(&calc).plan(2.03, 0.0).unwrap();
        assert_eq!(plan.target_slot, 2.0);
        assert_eq!(plan.travel, 0.0);
        assert_eq!(plan.duration_ms, 0);
    }

    #[test]
    fn test_slow_release_settles_on_nearest_slot() {
        let calc = looping(5);
        let plan = SnapPlanner::new(&calc).plan(1.3, 0.0).unwrap();
        assert_eq!(plan.target_slot, 1.0);
        assert_eq!(plan.direction, Direction::Backward);
        assert!((plan.travel - 0.3).abs() < 1e-5);
        assert_eq!(plan.duration_ms, 180);
    }

    #[test]
    fn test_forward_fling_carries_slots() {
        let calc = looping(5);
        let plan = SnapPlanner::new(&calc).plan(0.0, 10.0).unwrap();
        // 10 slots/sec decays over 240ms to ~2.4 slots of travel.
        assert_eq!(plan.target_slot, 2.0);
        assert_eq!(plan.direction, Direction::Forward);
        assert!((plan.travel - 2.0).abs() < 1e-5);
        assert_eq!(plan.duration_ms, 240);
    }

    #[test]
    fn test_backward_fling_wraps_the_loop() {
        let calc = looping(5);
        let plan = SnapPlanner::new(&calc).plan(0.5, -10.0).unwrap();
        // Landing near -1.9 wraps to 3.1; travel goes backward across 0.
        assert_eq!(plan.target_slot, 3.0);
        assert_eq!(plan.direction, Direction::Backward);
        assert!((plan.travel - 2.5).abs() < 1e-4);
        assert_eq!(plan.duration_ms, 240);
    }

    #[test]
    fn test_over_scrolled_fling_reverses_to_reach_target() {
        let calc = PositionCalculator::new(
            LoopConfig::new(4).without_looping().with_over_scroll(0.1),
        )
        .unwrap();
        // Released inside the over-scroll region with outward velocity: the
        // clamped landing rounds to the last real slot, behind the release.
        let plan = SnapPlanner::new(&calc).plan(3.05, 5.0).unwrap();
        assert_eq!(plan.target_slot, 3.0);
        assert_eq!(plan.direction, Direction::Backward);
        assert!((plan.travel - 0.05).abs() < 1e-4);
        assert_eq!(plan.duration_ms, 180);
    }

    #[test]
    fn test_clamped_fling_does_not_leave_bounds() {
        let calc =
            PositionCalculator::new(LoopConfig::new(4).without_looping()).unwrap();
        let plan = SnapPlanner::new(&calc).plan(2.0, 20.0).unwrap();
        assert_eq!(plan.target_slot, 3.0);
        assert_eq!(plan.direction, Direction::Forward);
        assert!((plan.travel - 1.0).abs() < 1e-5);
    }
}
