//! Slide strip transition.

use reel_core::{Ease, Tween};

/// Eases the slide strip's horizontal offset to `-100% * active_index`.
#[derive(Debug, Clone)]
pub struct TransitionController {
    duration: f64,
    from: f64,
    to: f64,
    offset: f64,
    tween: Option<Tween>,
}

impl TransitionController {
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            from: 0.0,
            to: 0.0,
            offset: 0.0,
            tween: None,
        }
    }

    /// Start easing toward the slide at `active_index` from wherever the
    /// strip currently is.
    pub fn on_active_index_changed(&mut self, active_index: usize) {
        self.from = self.offset;
        self.to = -100.0 * active_index as f64;
        self.tween = Some(Tween::new(self.duration, Ease::Power2InOut));
    }

    /// Advance the running transition by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        let Some(tween) = self.tween.as_mut() else {
            return;
        };
        tween.advance(dt);
        self.offset = self.from + (self.to - self.from) * tween.value();
        if tween.is_complete() {
            self.tween = None;
        }
    }

    /// Current strip offset in percent of one slide width.
    pub fn offset_percent(&self) -> f64 {
        self.offset
    }

    /// Offset the strip is heading to.
    pub fn target_percent(&self) -> f64 {
        self.to
    }
}
