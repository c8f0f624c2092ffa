//! Time subsystem.
//!
//! Turns host frame timestamps into logical ticks. Kept free of any scheduling
//! concerns so it can be driven directly in tests:
//! - one `TickClock` per loop
//! - call `advance()` once per frame with the host timestamp

mod tick_clock;

pub use tick_clock::{FrameTime, TickClock, ticks_for};
