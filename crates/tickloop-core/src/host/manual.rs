use std::cell::Cell;

use super::{FrameCallback, FrameHandle, FrameHost, FrameQueue};

/// Host whose frames only happen when the caller says so.
///
/// The clock starts at `0.0` ms and moves forward with [`advance_to`] or
/// [`step`], each of which runs one frame. Request and cancellation counts are
/// recorded for inspection.
///
/// [`advance_to`]: ManualHost::advance_to
/// [`step`]: ManualHost::step
#[derive(Debug, Default)]
pub struct ManualHost {
    queue: FrameQueue,
    now: Cell<f64>,
    requests: Cell<u64>,
    cancellations: Cell<u64>,
}

impl ManualHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current host time in milliseconds.
    pub fn now(&self) -> f64 {
        self.now.get()
    }

    /// Sets the clock to `timestamp` and runs one frame. Returns the number of
    /// callbacks that ran.
    pub fn advance_to(&self, timestamp: f64) -> usize {
        self.now.set(timestamp);
        self.queue.dispatch(timestamp)
    }

    /// Moves the clock forward by `delta_ms` and runs one frame.
    pub fn step(&self, delta_ms: f64) -> usize {
        self.advance_to(self.now.get() + delta_ms)
    }

    /// Runs `frames` frames spaced `delta_ms` apart.
    pub fn run_frames(&self, frames: usize, delta_ms: f64) -> usize {
        (0..frames).map(|_| self.step(delta_ms)).sum()
    }

    /// Callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Total `request_frame` calls received.
    pub fn requests(&self) -> u64 {
        self.requests.get()
    }

    /// Total `cancel_frame` calls received.
    pub fn cancellations(&self) -> u64 {
        self.cancellations.get()
    }
}

impl FrameHost for ManualHost {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        self.requests.set(self.requests.get() + 1);
        self.queue.push(callback)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.cancellations.set(self.cancellations.get() + 1);
        self.queue.cancel(handle);
    }
}
