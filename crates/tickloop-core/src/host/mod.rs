//! Frame scheduling host.
//!
//! The loop never schedules anything by itself; it asks a [`FrameHost`] to run a
//! callback before the next repaint. Platform crates implement the trait, and
//! [`ManualHost`] drives frames by hand for headless use and tests.

mod ambient;
mod manual;
mod queue;

pub use ambient::{current, install, uninstall};
pub use manual::ManualHost;
pub use queue::FrameQueue;

/// Callback invoked with the frame timestamp, in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

/// Opaque handle to a requested frame callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct FrameHandle(pub(crate) u64);

/// Animation-frame scheduling capability.
///
/// Methods take `&self`: hosts are shared between the loops scheduling on them
/// and the code pumping them, so implementations use interior mutability.
pub trait FrameHost {
    /// Queues `callback` to run on the next frame.
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle;

    /// Drops a previously requested callback. Unknown or already-run handles are
    /// ignored.
    fn cancel_frame(&self, handle: FrameHandle);
}
