//! tickloop core crate.
//!
//! This crate owns the loop driver, its event registry and the host capability it
//! schedules frames through. Platform hosts live in sibling crates.

pub mod driver;
pub mod events;
pub mod host;
pub mod time;

pub mod logging;

pub use driver::{FailurePolicy, GameLoop, LoopConfig, LoopError, LoopStats};
pub use events::Event;
pub use host::{FrameCallback, FrameHandle, FrameHost, ManualHost};
