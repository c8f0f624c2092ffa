//! Per-thread ambient host.
//!
//! Lets `GameLoop::new` find a host without one being passed in, the way browser
//! code finds the global animation-frame functions.

use std::cell::RefCell;
use std::rc::Rc;

use super::FrameHost;

thread_local! {
    static AMBIENT: RefCell<Option<Rc<dyn FrameHost>>> = const { RefCell::new(None) };
}

/// Installs `host` for the current thread and returns the previous one.
pub fn install(host: Rc<dyn FrameHost>) -> Option<Rc<dyn FrameHost>> {
    log::debug!("ambient frame host installed");
    AMBIENT.with(|slot| slot.borrow_mut().replace(host))
}

/// Removes the current thread's host.
pub fn uninstall() -> Option<Rc<dyn FrameHost>> {
    AMBIENT.with(|slot| slot.borrow_mut().take())
}

/// The current thread's host, if one is installed.
pub fn current() -> Option<Rc<dyn FrameHost>> {
    AMBIENT.with(|slot| slot.borrow().clone())
}
