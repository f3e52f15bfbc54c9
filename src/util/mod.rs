//! Shared utilities for the render loop.

/// Frame timing for the render loop.
pub mod frame_timing;

pub use frame_timing::FrameClock;
