//! Position arithmetic for looping (carousel-style) index spaces.
//!
//! `spindle-core` maps real-valued scroll offsets into a fixed-length slot
//! space and answers the questions a carousel asks every frame: where does
//! this position land once wrapped or clamped, how far away is the target
//! in each direction, which way is shorter, and which slots should be
//! composed around the current position.

pub mod calculator;
pub mod config;
pub mod direction;
pub mod error;
pub mod window;

pub use calculator::PositionCalculator;
pub use config::{LoopConfig, DEFAULT_OVER_SCROLL};
pub use direction::Direction;
pub use error::PositionError;
pub use window::{SlotWindow, WindowResolver, DEFAULT_PREFETCH_SLOTS};
