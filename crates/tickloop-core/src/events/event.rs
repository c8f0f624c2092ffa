use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Condition = Rc<RefCell<dyn FnMut() -> bool>>;
type Action = Rc<RefCell<dyn FnMut()>>;

/// A condition checked once per frame and the action run when it holds.
///
/// By default an event is one-shot: it fires when its condition becomes true and
/// stays quiet while it remains true. `run_while(true)` makes it fire on every
/// frame the condition holds.
///
/// Cloning is cheap and clones share the same closures.
///
/// ```rust,ignore
/// let g = game.clone();
/// game.add_event(Event::new(move || g.stats().ticks >= 10.0, || log::info!("ten ticks")));
/// ```
#[derive(Clone)]
pub struct Event {
    condition: Condition,
    action: Action,
    run_while: bool,
}

impl Event {
    pub fn new<C, A>(condition: C, action: A) -> Self
    where
        C: FnMut() -> bool + 'static,
        A: FnMut() + 'static,
    {
        Self {
            condition: Rc::new(RefCell::new(condition)),
            action: Rc::new(RefCell::new(action)),
            run_while: false,
        }
    }

    /// Fire on every frame the condition holds instead of once per transition.
    pub fn run_while(mut self, run_while: bool) -> Self {
        self.run_while = run_while;
        self
    }

    #[inline]
    pub fn runs_while(&self) -> bool {
        self.run_while
    }

    /// Evaluates the condition.
    ///
    /// # Panics
    /// Panics if called from inside this event's own condition.
    pub fn check(&self) -> bool {
        let mut condition = self.condition.borrow_mut();
        (&mut *condition)()
    }

    /// Runs the action.
    ///
    /// # Panics
    /// Panics if called from inside this event's own action.
    pub fn fire(&self) {
        let mut action = self.action.borrow_mut();
        (&mut *action)()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("run_while", &self.run_while)
            .finish_non_exhaustive()
    }
}
