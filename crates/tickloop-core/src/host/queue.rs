use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use super::{FrameCallback, FrameHandle};

/// Pending frame callbacks in request order.
///
/// Dispatch runs the callbacks that were queued when it started. Callbacks queued
/// while a batch runs wait for the next dispatch, so a loop re-arming itself from
/// inside its frame never runs twice per frame.
#[derive(Default)]
pub struct FrameQueue {
    next_id: Cell<u64>,
    pending: RefCell<Vec<(FrameHandle, FrameCallback)>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, callback: FrameCallback) -> FrameHandle {
        let handle = FrameHandle(self.next_id.get());
        self.next_id.set(self.next_id.get().wrapping_add(1));
        self.pending.borrow_mut().push((handle, callback));
        handle
    }

    /// Removes a queued callback. Returns `false` if it was not queued.
    pub fn cancel(&self, handle: FrameHandle) -> bool {
        let mut pending = self.pending.borrow_mut();
        match pending.iter().position(|(h, _)| *h == handle) {
            Some(index) => {
                pending.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }

    /// Runs the current batch with `timestamp` and returns how many callbacks ran.
    ///
    /// A panicking callback does not stop the rest of the batch. Once every
    /// callback has run, the first panic is resumed.
    pub fn dispatch(&self, timestamp: f64) -> usize {
        // Taken out so callbacks can queue again without a double borrow.
        let batch = std::mem::take(&mut *self.pending.borrow_mut());
        let count = batch.len();
        let mut first_panic = None;

        for (_, callback) in batch {
            let result = panic::catch_unwind(AssertUnwindSafe(move || callback(timestamp)));
            if let Err(payload) = result {
                first_panic.get_or_insert(payload);
            }
        }

        if let Some(payload) = first_panic {
            panic::resume_unwind(payload);
        }

        count
    }
}

impl fmt::Debug for FrameQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameQueue")
            .field("next_id", &self.next_id.get())
            .field("pending", &self.len())
            .finish()
    }
}
