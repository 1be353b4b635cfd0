//! Visible and prefetch slot windows around a position.
//!
//! Carousel virtualization composes only the slots near the current
//! position. The resolver turns a (possibly fractional) position into the
//! ordered visible slot indices plus the slots worth preparing past both
//! edges.

use crate::calculator::PositionCalculator;

/// Slots to prepare past each edge of the visible window.
/// Two per side keeps one swipe of content composed ahead of time.
pub const DEFAULT_PREFETCH_SLOTS: usize = 2;

/// Resolved slot window around a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotWindow {
    /// Slot indices at least partially visible, in display order.
    pub visible: Vec<usize>,
    /// Slot indices to prepare beyond both edges, nearest first,
    /// alternating trailing edge then leading edge.
    pub prefetch: Vec<usize>,
}

impl SlotWindow {
    fn empty() -> Self {
        Self {
            visible: Vec::new(),
            prefetch: Vec::new(),
        }
    }
}

/// Resolves visible/prefetch windows over a calculator's slot space.
pub struct WindowResolver<'a> {
    calculator: &'a PositionCalculator,
    visible_count: usize,
    prefetch_count: usize,
}

impl<'a> WindowResolver<'a> {
    /// Creates a resolver showing `visible_count` slots at a time.
    pub fn new(calculator: &'a PositionCalculator, visible_count: usize) -> Self {
        Self {
            calculator,
            visible_count,
            prefetch_count: DEFAULT_PREFETCH_SLOTS,
        }
    }

    /// Overrides the prefetch depth per edge.
    pub fn with_prefetch(mut self, prefetch_count: usize) -> Self {
        self.prefetch_count = prefetch_count;
        self
    }

    /// Resolves the window around `position`.
    ///
    /// A fractional position reveals a sliver of one slot past the last
    /// fully visible one, so the window may span `visible_count + 1`
    /// slots. Windows at least as large as the slot space degrade to "all
    /// slots, no prefetch".
    pub fn resolve(&self, position: f32) -> SlotWindow {
        let length = self.calculator.length();
        if self.visible_count == 0 {
            log::warn!("window resolver asked for 0 visible slots");
            return SlotWindow::empty();
        }
        if self.visible_count >= length {
            log::warn!(
                "window of {} slots covers the whole space of {}; composing all slots",
                self.visible_count,
                length
            );
            return SlotWindow {
                visible: (0..length).collect(),
                prefetch: Vec::new(),
            };
        }

        let corrected = self.calculator.corrected_position(position);
        if self.calculator.is_looping() {
            self.resolve_looping(corrected, length)
        } else {
            self.resolve_clamped(corrected, length)
        }
    }

    fn resolve_looping(&self, corrected: f32, length: usize) -> SlotWindow {
        let start = corrected.floor();
        let span = (((corrected + self.visible_count as f32).ceil() - start) as usize).min(length);
        // The corrected position can be `length` exactly (negative-multiple
        // wrap); reduce the starting slot into range.
        let first = (start as usize) % length;

        let visible: Vec<usize> = (0..span).map(|i| (first + i) % length).collect();

        let depth = self.prefetch_count.min(length - span);
        let mut prefetch = Vec::new();
        for j in 1..=depth {
            let after = (first + span - 1 + j) % length;
            if !visible.contains(&after) && !prefetch.contains(&after) {
                prefetch.push(after);
            }
            let before = (first + length - j) % length;
            if !visible.contains(&before) && !prefetch.contains(&before) {
                prefetch.push(before);
            }
        }

        SlotWindow { visible, prefetch }
    }

    fn resolve_clamped(&self, corrected: f32, length: usize) -> SlotWindow {
        // Over-scroll can put the corrected position slightly below zero;
        // the window truncates at the array bounds.
        let first = corrected.floor().max(0.0) as usize;
        let last_raw = (corrected + self.visible_count as f32).ceil() - 1.0;
        let last = (last_raw.max(0.0) as usize).min(length - 1);
        let first = first.min(last);

        let visible: Vec<usize> = (first..=last).collect();

        let mut prefetch = Vec::new();
        for j in 1..=self.prefetch_count {
            if last + j < length {
                prefetch.push(last + j);
            }
            if first >= j {
                prefetch.push(first - j);
            }
        }

        SlotWindow { visible, prefetch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoopConfig;

    fn looping(length: usize) -> PositionCalculator {
        PositionCalculator::new(LoopConfig::new(length)).unwrap()
    }

    fn clamped(length: usize) -> PositionCalculator {
        PositionCalculator::new(LoopConfig::new(length).without_looping()).unwrap()
    }

    #[test]
    fn test_aligned_looping_window() {
        let calc = looping(6);
        let window = WindowResolver::new(&calc, 2).resolve(0.0);
        assert_eq!(window.visible, vec![0, 1]);
        // Nearest first, trailing edge then leading edge.
        assert_eq!(window.prefetch, vec![2, 5, 3, 4]);
    }

    #[test]
    fn test_fractional_position_reveals_extra_slot() {
        let calc = looping(6);
        let window = WindowResolver::new(&calc, 2).resolve(4.5);
        assert_eq!(window.visible, vec![4, 5, 0]);
        assert_eq!(window.prefetch, vec![1, 3, 2]);
    }

    #[test]
    fn test_window_covering_whole_loop_degrades() {
        let calc = looping(3);
        let window = WindowResolver::new(&calc, 3).resolve(1.0);
        assert_eq!(window.visible, vec![0, 1, 2]);
        assert!(window.prefetch.is_empty());
    }

    #[test]
    fn test_sliver_window_covering_whole_loop() {
        let calc = looping(6);
        let window = WindowResolver::new(&calc, 5).resolve(2.5);
        // Five slots plus the sliver wrap all the way around.
        assert_eq!(window.visible, vec![2, 3, 4, 5, 0, 1]);
        assert!(window.prefetch.is_empty());
    }

    #[test]
    fn test_negative_multiple_position_starts_at_slot_zero() {
        let calc = looping(5);
        let window = WindowResolver::new(&calc, 2).resolve(-5.0);
        assert_eq!(window.visible, vec![0, 1]);
    }

    #[test]
    fn test_clamped_window_truncates_at_start() {
        let calc = clamped(4);
        let window = WindowResolver::new(&calc, 2).resolve(-10.0);
        // Corrected to -0.1; the sliver past the edge truncates away.
        assert_eq!(window.visible, vec![0, 1]);
        assert_eq!(window.prefetch, vec![2, 3]);
    }

    #[test]
    fn test_clamped_window_truncates_at_end() {
        let calc = clamped(4);
        let window = WindowResolver::new(&calc, 2).resolve(10.0);
        // Corrected to 3.1; only the last slot remains visible.
        assert_eq!(window.visible, vec![3]);
        assert_eq!(window.prefetch, vec![2, 1]);
    }

    #[test]
    fn test_clamped_interior_window() {
        let calc = clamped(4);
        let window = WindowResolver::new(&calc, 2).resolve(1.0);
        assert_eq!(window.visible, vec![1, 2]);
        assert_eq!(window.prefetch, vec![3, 0]);
    }

    #[test]
    fn test_zero_visible_count_is_empty() {
        let calc = looping(5);
        let window = WindowResolver::new(&calc, 0).resolve(1.0);
        assert!(window.visible.is_empty());
        assert!(window.prefetch.is_empty());
    }
}
