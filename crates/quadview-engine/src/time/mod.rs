//! Frame timing.
//!
//! One `FrameClock` per window loop; call `tick()` once per presented frame
//! to obtain a `FrameTime`. Camera motion is scaled by `FrameTime::dt`.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
