/// Environment variable read by [`LoopConfig::with_env`].
pub const TICK_RATE_ENV: &str = "TICKLOOP_TICK_RATE";

/// What the loop does when an event's condition or action panics.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum FailurePolicy {
    /// Log the failure with the event index, then keep evaluating the remaining
    /// events and keep the loop scheduled.
    #[default]
    Isolate,

    /// Let the panic unwind out of the frame callback. The rest of the frame is
    /// skipped and the loop is not re-armed.
    FailFast,
}

/// Loop configuration.
///
/// Defaults: one tick per second, events evaluated while paused, isolated
/// failures.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LoopConfig {
    /// Ticks accrued per real second. Not validated.
    pub tick_rate: f64,

    /// Skip firing events while the loop is paused.
    ///
    /// Conditions are still evaluated; a paused frame counts as "not satisfied",
    /// so one-shot events re-arm across a pause.
    pub pause_gates_events: bool,

    pub failure_policy: FailurePolicy,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            tick_rate: 1.0,
            pause_gates_events: false,
            failure_policy: FailurePolicy::Isolate,
        }
    }
}

impl LoopConfig {
    /// Defaults overlaid with the environment.
    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    /// Applies `TICKLOOP_TICK_RATE` when it is set to a finite number.
    pub fn with_env(mut self) -> Self {
        if let Ok(raw) = std::env::var(TICK_RATE_ENV) {
            match parse_tick_rate(&raw) {
                Some(rate) => self.tick_rate = rate,
                None => log::warn!("ignoring {TICK_RATE_ENV}={raw:?}: not a finite number"),
            }
        }
        self
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn pause_gates_events(mut self, gate: bool) -> Self {
        self.pause_gates_events = gate;
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }
}

fn parse_tick_rate(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = LoopConfig::default();
        assert_eq!(cfg.tick_rate, 1.0);
        assert!(!cfg.pause_gates_events);
        assert_eq!(cfg.failure_policy, FailurePolicy::Isolate);
    }

    #[test]
    fn setters_chain() {
        let cfg = LoopConfig::default()
            .tick_rate(30.0)
            .pause_gates_events(true)
            .failure_policy(FailurePolicy::FailFast);
        assert_eq!(cfg.tick_rate, 30.0);
        assert!(cfg.pause_gates_events);
        assert_eq!(cfg.failure_policy, FailurePolicy::FailFast);
    }

    #[test]
    fn tick_rate_parsing() {
        assert_eq!(parse_tick_rate(" 2.5 "), Some(2.5));
        assert_eq!(parse_tick_rate("-1"), Some(-1.0));
        assert_eq!(parse_tick_rate("fast"), None);
        assert_eq!(parse_tick_rate("inf"), None);
        assert_eq!(parse_tick_rate(""), None);
    }
}
