/// Read-only view of a loop's counters, built fresh on every `GameLoop::stats`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LoopStats {
    /// Ticks accrued since the first frame, paused or not.
    pub ticks: f64,

    /// Ticks accrued on unpaused frames only.
    pub unpaused_ticks: f64,

    /// Ticks per real second.
    pub tick_rate: f64,

    /// Frames processed so far.
    pub frames: u64,

    pub paused: bool,
    pub terminated: bool,

    /// Event evaluations that panicked and were isolated.
    pub failed_events: u64,
}

impl LoopStats {
    /// Whole ticks elapsed, saturating at zero.
    #[inline]
    pub fn whole_ticks(&self) -> u64 {
        whole(self.ticks)
    }

    /// Whole unpaused ticks elapsed, saturating at zero.
    #[inline]
    pub fn whole_unpaused_ticks(&self) -> u64 {
        whole(self.unpaused_ticks)
    }
}

#[inline]
fn whole(ticks: f64) -> u64 {
    ticks.max(0.0).floor() as u64
}
