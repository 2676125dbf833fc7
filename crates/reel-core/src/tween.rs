//! A minimal tween: a clock-driven progress value with update/complete
//! reporting.
//!
//! `progress()` is the linear time fraction in `[0, 1]` and can be read or
//! overwritten; `value()` applies the easing curve. Completion is reported
//! exactly once per run, the first time progress reaches 1.

use crate::easing::Ease;

/// What happened during one tween step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TweenStep {
    /// The tween rendered a new frame (fires on every live step).
    pub updated: bool,
    /// The tween reached the end during this step.
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct Tween {
    duration: f64,
    elapsed: f64,
    ease: Ease,
    paused: bool,
    completed: bool,
}

impl Tween {
    /// Create a running tween. Negative or non-finite durations are
    /// treated as zero, which completes on the first step.
    pub fn new(duration: f64, ease: Ease) -> Self {
        let duration = if duration.is_finite() && duration > 0.0 {
            duration
        } else {
            0.0
        };
        Self {
            duration,
            elapsed: 0.0,
            ease,
            paused: false,
            completed: false,
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration == 0.0 {
            return if self.completed { 1.0 } else { 0.0 };
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.ease.apply(self.progress())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Advance by `dt` seconds. Paused tweens do not move or report.
    pub fn advance(&mut self, dt: f64) -> TweenStep {
        if self.paused || self.completed {
            return TweenStep::default();
        }
        self.elapsed += dt.max(0.0);
        self.render()
    }

    /// Jump to `progress` (clamped to `[0, 1]`). Works while paused.
    /// Setting the position the tween already rests at does not render.
    pub fn set_progress(&mut self, progress: f64) -> TweenStep {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        let elapsed = progress * self.duration;
        if elapsed == self.elapsed && (self.completed || elapsed < self.duration) {
            return TweenStep::default();
        }
        self.elapsed = elapsed;
        if progress < 1.0 {
            self.completed = false;
        }
        self.render()
    }

    fn render(&mut self) -> TweenStep {
        let done = self.elapsed >= self.duration;
        let completed = done && !self.completed;
        if done {
            self.elapsed = self.duration;
            self.completed = true;
        }
        TweenStep {
            updated: true,
            completed,
        }
    }
}
