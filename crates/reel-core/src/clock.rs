//! Shared animation-frame clock.
//!
//! The host calls [`FrameClock::tick`] once per rendered frame with the
//! wall-clock delta. Everything that animates reads the resulting
//! [`FrameTick`] instead of keeping its own time source.

/// Deltas above this are clamped so a stalled host (window hidden,
/// debugger break) does not fast-forward every animation at once.
pub const MAX_FRAME_DELTA: f64 = 0.25;

/// Timing information for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTick {
    /// Sequence number, starting at 1 for the first tick.
    pub frame: u64,
    /// Seconds since the previous tick (clamped).
    pub delta: f64,
    /// Seconds since the clock started.
    pub elapsed: f64,
}

#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    frame: u64,
    elapsed: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds and return the tick.
    pub fn tick(&mut self, dt: f64) -> FrameTick {
        let delta = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DELTA)
        } else {
            0.0
        };
        self.frame += 1;
        self.elapsed += delta;
        FrameTick {
            frame: self.frame,
            delta,
            elapsed: self.elapsed,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
