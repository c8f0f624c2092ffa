//! Condition/action events.
//!
//! Public API is the [`Event`] value. Whether an event fired last frame is driver
//! bookkeeping and lives in the [`EventRegistry`], never on the event itself.

mod event;
mod registry;

pub use event::Event;
pub use registry::{EventId, EventRegistry};
