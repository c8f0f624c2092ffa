/// Frame timing snapshot.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Host timestamp of this frame, in milliseconds.
    pub timestamp: f64,

    /// Milliseconds since the previous frame. `None` on the first frame.
    pub delta_ms: Option<f64>,

    /// Milliseconds of unpaused time this frame contributed. `None` on the first
    /// frame and on paused frames.
    pub unpaused_delta_ms: Option<f64>,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Ticks accrued over `delta_ms` milliseconds at `tick_rate` ticks per second.
#[inline]
pub fn ticks_for(tick_rate: f64, delta_ms: f64) -> f64 {
    tick_rate * delta_ms / 1000.0
}

/// Timestamp and delta that only move while the loop is running.
#[derive(Debug, Copy, Clone, Default)]
struct UnpausedTrack {
    timestamp: f64,
    delta: f64,
}

/// Continuous tick accumulator fed by host timestamps.
///
/// Two counters are kept: `ticks` advances on every frame, `unpaused_ticks` only on
/// frames where the loop is not paused. Both are real-valued; callers round as
/// they see fit.
///
/// The clock does not clamp or validate anything. Timestamps are expected to be
/// non-decreasing and a zero or negative tick rate freezes or reverses the counters.
#[derive(Debug, Clone)]
pub struct TickClock {
    tick_rate: f64,
    last_timestamp: Option<f64>,
    delta_ms: f64,
    ticks: f64,
    unpaused: UnpausedTrack,
    unpaused_ticks: f64,
    frame_index: u64,
}

impl TickClock {
    pub fn new(tick_rate: f64) -> Self {
        Self {
            tick_rate,
            last_timestamp: None,
            delta_ms: 0.0,
            ticks: 0.0,
            unpaused: UnpausedTrack::default(),
            unpaused_ticks: 0.0,
            frame_index: 0,
        }
    }

    #[inline]
    pub fn tick_rate(&self) -> f64 {
        self.tick_rate
    }

    /// Replaces the rate used from the next `advance()` on.
    #[inline]
    pub fn set_tick_rate(&mut self, tick_rate: f64) {
        self.tick_rate = tick_rate;
    }

    #[inline]
    pub fn ticks(&self) -> f64 {
        self.ticks
    }

    #[inline]
    pub fn unpaused_ticks(&self) -> f64 {
        self.unpaused_ticks
    }

    /// Number of frames fed to the clock so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frame_index
    }

    /// Timestamp of the most recent frame, if any.
    #[inline]
    pub fn last_timestamp(&self) -> Option<f64> {
        self.last_timestamp
    }

    /// Milliseconds between the two most recent frames.
    #[inline]
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Timestamp of the most recent unpaused frame that produced a delta.
    #[inline]
    pub fn unpaused_timestamp(&self) -> f64 {
        self.unpaused.timestamp
    }

    /// Milliseconds between the two most recent unpaused frames.
    #[inline]
    pub fn unpaused_delta_ms(&self) -> f64 {
        self.unpaused.delta
    }

    /// Advances the clock to `timestamp` and returns the frame's timing.
    ///
    /// The first call only records the baseline.
    pub fn advance(&mut self, timestamp: f64, paused: bool) -> FrameTime {
        let mut delta_ms = None;
        let mut unpaused_delta_ms = None;

        if let Some(last) = self.last_timestamp {
            let delta = timestamp - last;
            self.delta_ms = delta;
            self.ticks += ticks_for(self.tick_rate, delta);

            if !paused {
                self.unpaused = UnpausedTrack { timestamp, delta };
                self.unpaused_ticks += ticks_for(self.tick_rate, self.unpaused.delta);
                unpaused_delta_ms = Some(self.unpaused.delta);
            }

            delta_ms = Some(delta);
        }

        self.last_timestamp = Some(timestamp);

        let ft = FrameTime {
            timestamp,
            delta_ms,
            unpaused_delta_ms,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new(1.0)
    }
}
