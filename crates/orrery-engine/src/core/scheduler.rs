//! Display-refresh scheduling.
//!
//! The frame loop never talks to the platform directly. It is handed to a
//! `FrameScheduler`, which invokes it once per refresh with a millisecond
//! timestamp until cancelled. The browser implementation lives in
//! `orrery-web`; `ManualScheduler` drives the same callback from tests.

/// Callback invoked once per refresh with the refresh timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnMut(f64)>;

pub trait FrameScheduler {
    /// Begin invoking `callback` at the platform's refresh cadence.
    /// Replaces any callback already running.
    fn start(&mut self, callback: FrameCallback);

    /// Stop invoking the callback. Calling it twice is harmless.
    fn cancel(&mut self);

    /// Whether a callback is currently scheduled.
    fn is_running(&self) -> bool;
}

/// Scheduler that only fires when told to.
#[derive(Default)]
pub struct ManualScheduler {
    callback: Option<FrameCallback>,
    frames: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one refresh at `now_ms`. Returns false if nothing is scheduled.
    pub fn fire(&mut self, now_ms: f64) -> bool {
        match self.callback.as_mut() {
            Some(cb) => {
                cb(now_ms);
                self.frames += 1;
                true
            }
            None => false,
        }
    }

    /// Number of refreshes delivered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameScheduler for ManualScheduler {
    fn start(&mut self, callback: FrameCallback) {
        self.callback = Some(callback);
    }

    fn cancel(&mut self) {
        self.callback = None;
    }

    fn is_running(&self) -> bool {
        self.callback.is_some()
    }
}
