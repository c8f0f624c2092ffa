//! Loop driver.
//!
//! [`GameLoop`] owns the timing state and the event registry and re-arms itself on
//! its host once per frame until terminated.

mod config;
mod error;
mod game_loop;
mod stats;

pub use config::{FailurePolicy, LoopConfig, TICK_RATE_ENV};
pub use error::LoopError;
pub use game_loop::GameLoop;
pub use stats::LoopStats;
