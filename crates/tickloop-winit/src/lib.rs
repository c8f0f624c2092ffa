//! winit frame host.
//!
//! Owns the `winit` EventLoop and Window and turns redraw requests into tickloop
//! frames.

mod host;
mod runtime;

pub use host::WinitFrameHost;
pub use runtime::{Runtime, RuntimeConfig};
pub use winit::window::Window;
