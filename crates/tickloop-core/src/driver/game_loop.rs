use std::any::Any;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use crate::events::{Event, EventId, EventRegistry};
use crate::host::{self, FrameHandle, FrameHost};
use crate::time::TickClock;

use super::config::{FailurePolicy, LoopConfig};
use super::error::LoopError;
use super::stats::LoopStats;

/// Tick loop driven by a [`FrameHost`].
///
/// Every frame the loop advances its tick counters from the host timestamp, then
/// walks the registered events in order:
/// - a satisfied event fires its action and becomes active
/// - an unsatisfied event becomes inactive
/// - a satisfied one-shot event that is still active ends the pass, so events
///   registered after it are not looked at until its condition goes false
///
/// `GameLoop` is a shared handle. Clones drive the same loop, and every method
/// can be called from inside an event's condition or action.
///
/// The pass runs over the registry as it was when the frame started: events
/// added during a pass wait for the next frame, and events removed during a pass
/// are skipped if their turn has not come yet.
#[derive(Clone)]
pub struct GameLoop {
    shared: Rc<Shared>,
}

struct Shared {
    host: Rc<dyn FrameHost>,
    state: RefCell<LoopState>,
}

struct LoopState {
    clock: TickClock,
    registry: EventRegistry,
    paused: bool,
    pause_gates_events: bool,
    failure_policy: FailurePolicy,
    pending: Option<FrameHandle>,
    terminated: bool,
    failed_events: u64,
}

/// Outcome of evaluating one event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Step {
    Fired,
    Idle,
    Halt,
}

impl GameLoop {
    /// Creates a loop on the current thread's ambient host.
    ///
    /// Fails with [`LoopError::NoFrameHost`] when no host is installed; nothing is
    /// scheduled in that case.
    pub fn new(config: LoopConfig) -> Result<Self, LoopError> {
        let host = host::current().ok_or(LoopError::NoFrameHost)?;
        Ok(Self::with_host(host, config))
    }

    /// Creates a loop on `host` and schedules its first frame.
    pub fn with_host(host: Rc<dyn FrameHost>, config: LoopConfig) -> Self {
        let shared = Rc::new(Shared {
            host,
            state: RefCell::new(LoopState {
                clock: TickClock::new(config.tick_rate),
                registry: EventRegistry::new(),
                paused: false,
                pause_gates_events: config.pause_gates_events,
                failure_policy: config.failure_policy,
                pending: None,
                terminated: false,
                failed_events: 0,
            }),
        });

        log::debug!(
            "game loop created: tick_rate={} pause_gates_events={} failure_policy={:?}",
            config.tick_rate,
            config.pause_gates_events,
            config.failure_policy
        );

        schedule(&shared);
        Self { shared }
    }

    // ── Events ────────────────────────────────────────────────────────────

    /// Appends `event`; it is evaluated after every event already registered.
    pub fn add_event(&self, event: Event) {
        self.shared.state.borrow_mut().registry.push(event);
    }

    /// The event at `index`, or `None` when out of range.
    pub fn get_event(&self, index: usize) -> Option<Event> {
        self.shared.state.borrow().registry.get(index).cloned()
    }

    /// All events in evaluation order.
    ///
    /// Removal is positional, so fetch a fresh list before picking an index.
    pub fn get_all(&self) -> Vec<Event> {
        self.shared.state.borrow().registry.iter().cloned().collect()
    }

    /// Removes the event at `index`. Out-of-range indices are ignored.
    pub fn remove_event(&self, index: usize) -> Option<Event> {
        self.shared.state.borrow_mut().registry.remove(index)
    }

    pub fn remove_all(&self) {
        self.shared.state.borrow_mut().registry.clear();
    }

    pub fn event_count(&self) -> usize {
        self.shared.state.borrow().registry.len()
    }

    // ── Control ───────────────────────────────────────────────────────────

    /// Stops unpaused ticks from accruing. Frames keep arriving.
    pub fn pause(&self) {
        self.set_paused(true);
    }

    pub fn resume(&self) {
        self.set_paused(false);
    }

    /// Flips the paused flag and returns the new value.
    pub fn toggle_pause(&self) -> bool {
        let paused = !self.is_paused();
        self.set_paused(paused);
        paused
    }

    pub fn is_paused(&self) -> bool {
        self.shared.state.borrow().paused
    }

    /// Replaces the tick rate used from the next frame on.
    pub fn change_tick_rate(&self, tick_rate: f64) {
        self.shared.state.borrow_mut().clock.set_tick_rate(tick_rate);
        log::debug!("tick rate changed to {tick_rate}");
    }

    /// Cancels the pending frame. The loop never runs again; repeated calls do
    /// nothing.
    pub fn terminate(&self) {
        let pending = {
            let mut state = self.shared.state.borrow_mut();
            if state.terminated {
                return;
            }
            state.terminated = true;
            state.pending.take()
        };

        if let Some(handle) = pending {
            self.shared.host.cancel_frame(handle);
        }

        log::debug!("game loop terminated");
    }

    pub fn is_terminated(&self) -> bool {
        self.shared.state.borrow().terminated
    }

    pub fn stats(&self) -> LoopStats {
        let state = self.shared.state.borrow();
        LoopStats {
            ticks: state.clock.ticks(),
            unpaused_ticks: state.clock.unpaused_ticks(),
            tick_rate: state.clock.tick_rate(),
            frames: state.clock.frames(),
            paused: state.paused,
            terminated: state.terminated,
            failed_events: state.failed_events,
        }
    }

    fn set_paused(&self, paused: bool) {
        let mut state = self.shared.state.borrow_mut();
        if state.paused != paused {
            state.paused = paused;
            log::debug!("game loop {}", if paused { "paused" } else { "resumed" });
        }
    }
}

fn schedule(shared: &Rc<Shared>) {
    let next = Rc::clone(shared);
    let handle = shared
        .host
        .request_frame(Box::new(move |timestamp| run_frame(&next, timestamp)));
    shared.state.borrow_mut().pending = Some(handle);
}

fn run_frame(shared: &Rc<Shared>, timestamp: f64) {
    // The state borrow must end before any user code runs.
    let (snapshot, gated, policy) = {
        let mut state = shared.state.borrow_mut();
        if state.terminated {
            return;
        }
        state.pending = None;

        let paused = state.paused;
        let ft = state.clock.advance(timestamp, paused);
        log::trace!(
            "frame {} at {:.3}ms: delta={:?} ticks={:.3} unpaused_ticks={:.3}",
            ft.frame_index,
            ft.timestamp,
            ft.delta_ms,
            state.clock.ticks(),
            state.clock.unpaused_ticks()
        );

        (
            state.registry.snapshot(),
            paused && state.pause_gates_events,
            state.failure_policy,
        )
    };

    evaluate(shared, &snapshot, gated, policy);

    if !shared.state.borrow().terminated {
        schedule(shared);
    }
}

fn evaluate(shared: &Shared, snapshot: &[(EventId, Event)], gated: bool, policy: FailurePolicy) {
    for (index, (id, event)) in snapshot.iter().enumerate() {
        let was_active = {
            let state = shared.state.borrow();
            if state.terminated {
                return;
            }
            match state.registry.is_active(*id) {
                Some(active) => active,
                // Removed earlier in this pass.
                None => continue,
            }
        };

        let outcome = match policy {
            FailurePolicy::Isolate => {
                panic::catch_unwind(AssertUnwindSafe(|| step(event, was_active, gated)))
            }
            FailurePolicy::FailFast => Ok(step(event, was_active, gated)),
        };

        match outcome {
            Ok(Step::Fired) => shared.state.borrow_mut().registry.set_active(*id, true),
            Ok(Step::Idle) => shared.state.borrow_mut().registry.set_active(*id, false),
            Ok(Step::Halt) => return,
            Err(payload) => {
                log::error!("event {index} panicked: {}", panic_message(&*payload));
                shared.state.borrow_mut().failed_events += 1;
            }
        }
    }
}

fn step(event: &Event, was_active: bool, gated: bool) -> Step {
    if event.check() && !gated {
        if was_active && !event.runs_while() {
            return Step::Halt;
        }
        event.fire();
        Step::Fired
    } else {
        Step::Idle
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "non-string panic payload"
    }
}
