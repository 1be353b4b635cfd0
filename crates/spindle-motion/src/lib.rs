//! Fling projection and snap planning for Spindle carousels.
//!
//! Builds on `spindle-core` position arithmetic: project where a release
//! velocity lands under kinetic decay, then settle on an integer slot the
//! shortest sensible way.

pub mod fling;
pub mod motion_constants;
pub mod snap;

pub use fling::{FlingProjection, SlotFling};
pub use snap::{SnapPlan, SnapPlanner};
