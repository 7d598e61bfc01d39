//! Animation system for the bottom sheet drawer
//!
//! Time-based tweens with easing curves, advanced by timestamps supplied
//! from the host's frame clock.

mod animation;

pub use animation::*;
