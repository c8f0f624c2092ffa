use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

use winit::window::Window;

use tickloop_core::host::{FrameCallback, FrameHandle, FrameHost, FrameQueue};

/// Frame host backed by a winit window's redraw cycle.
///
/// Callbacks requested on the host run on the window's next `RedrawRequested`,
/// stamped with the milliseconds elapsed since the host was created. Requests made
/// before the window exists are kept and run once it is attached.
pub struct WinitFrameHost {
    queue: FrameQueue,
    origin: Instant,
    window: RefCell<Option<Rc<Window>>>,
}

impl WinitFrameHost {
    pub fn new() -> Self {
        Self {
            queue: FrameQueue::new(),
            origin: Instant::now(),
            window: RefCell::new(None),
        }
    }

    /// Milliseconds since the host was created.
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }

    /// The attached window, once the runtime has created it.
    pub fn window(&self) -> Option<Rc<Window>> {
        self.window.borrow().clone()
    }

    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    pub(crate) fn attach(&self, window: Rc<Window>) {
        if self.has_pending() {
            window.request_redraw();
        }
        *self.window.borrow_mut() = Some(window);
    }

    pub(crate) fn detach(&self) {
        self.window.borrow_mut().take();
    }

    /// Runs the queued batch. Returns the number of callbacks that ran.
    pub(crate) fn dispatch(&self) -> usize {
        self.queue.dispatch(self.now_ms())
    }
}

impl Default for WinitFrameHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHost for WinitFrameHost {
    fn request_frame(&self, callback: FrameCallback) -> FrameHandle {
        let handle = self.queue.push(callback);
        if let Some(window) = self.window.borrow().as_ref() {
            window.request_redraw();
        }
        handle
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.queue.cancel(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn requests_wait_for_dispatch_without_a_window() {
        let host = WinitFrameHost::new();
        let seen = Rc::new(Cell::new(-1.0));
        let s = Rc::clone(&seen);
        host.request_frame(Box::new(move |ts| s.set(ts)));

        assert!(host.has_pending());
        assert!(host.window().is_none());

        assert_eq!(host.dispatch(), 1);
        assert!(seen.get() >= 0.0);
        assert!(!host.has_pending());
    }

    #[test]
    fn cancelled_requests_do_not_run() {
        let host = WinitFrameHost::new();
        let handle = host.request_frame(Box::new(|_| panic!("cancelled frame ran")));
        host.cancel_frame(handle);
        assert_eq!(host.dispatch(), 0);
    }

    #[test]
    fn timestamps_are_monotonic() {
        let host = WinitFrameHost::new();
        let a = host.now_ms();
        let b = host.now_ms();
        assert!(b >= a);
    }
}
