/// Variable-step frame clock.
///
/// Turns the display-refresh timestamps handed to the frame callback into
/// per-tick deltas. No accumulation and no catch-up: a slow frame simply
/// reports a larger `dt` on the next tick.
pub struct FrameClock {
    /// Timestamp of the previous tick in milliseconds.
    last_ms: Option<f64>,
    /// Delta reported on the first tick, in seconds.
    first_dt: f32,
}

impl FrameClock {
    pub fn new(first_dt: f32) -> Self {
        Self {
            last_ms: None,
            first_dt,
        }
    }

    /// Record a tick at `now_ms` and return seconds since the previous tick.
    /// Timestamps that go backwards yield zero.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            None => self.first_dt,
            Some(last) if now_ms < last => {
                log::trace!("frame clock went backwards: {last} -> {now_ms}");
                0.0
            }
            Some(last) => ((now_ms - last) / 1000.0) as f32,
        };
        self.last_ms = Some(now_ms);
        dt
    }
}
