//! Progress indicator animation.
//!
//! One tween is live at a time, scoped to the active clip. While playing,
//! a correction binding overwrites the tween's progress every frame with
//! the real media position; the timer only fills in when no position can
//! be read. Pausing pauses the tween and detaches the binding, which
//! freezes the indicator where it is.

use reel_core::{Color, Ease, Length, Tween, Viewport};
use tracing::{debug, trace};

use crate::layout::LayoutResponder;

/// Float noise allowance for the ceiling in [`percent_of`].
const PERCENT_EPSILON: f64 = 1e-9;

/// Visual state of one clip's progress indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorVisual {
    /// Width of the outer container.
    pub container_width: Length,
    /// Width of the inner fill, in percent of the container.
    pub fill_percent: u8,
    pub fill_color: Color,
}

impl IndicatorVisual {
    pub fn resting(width: Length, color: Color) -> Self {
        Self {
            container_width: width,
            fill_percent: 0,
            fill_color: color,
        }
    }
}

/// Ceiling percentage of a `[0, 1]` progress value.
pub fn percent_of(progress: f64) -> u8 {
    if progress.is_nan() {
        return 0;
    }
    ((progress * 100.0) - PERCENT_EPSILON).ceil().clamp(0.0, 100.0) as u8
}

/// The per-frame subscription that pins progress to the media position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectionBinding {
    pub index: usize,
    pub duration: f64,
}

#[derive(Debug)]
struct LiveAnimation {
    index: usize,
    tween: Tween,
    /// Last percent written; advisory only.
    percent: u8,
}

/// Outcome of one animator frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub index: usize,
    pub percent: u8,
    /// The animation reached 100% on this frame.
    pub completed: bool,
}

#[derive(Debug)]
pub struct ProgressAnimator {
    layout: LayoutResponder,
    active_color: Color,
    inactive_color: Color,
    playing: bool,
    animation: Option<LiveAnimation>,
    correction: Option<CorrectionBinding>,
}

impl ProgressAnimator {
    pub fn new(layout: LayoutResponder, active_color: Color, inactive_color: Color) -> Self {
        Self {
            layout,
            active_color,
            inactive_color,
            playing: false,
            animation: None,
            correction: None,
        }
    }

    /// Replace the live animation with a fresh one for `index` and render
    /// its 0% frame into `indicator`.
    ///
    /// The previous tween and correction binding are dropped first, so no
    /// tick can reach the old index afterwards. Re-activating an index
    /// that already ran (replay, second pass) starts its indicator over.
    pub fn activate(
        &mut self,
        index: usize,
        duration: f64,
        viewport: Viewport,
        indicator: Option<&mut IndicatorVisual>,
    ) {
        self.correction = None;

        let mut tween = Tween::new(duration, Ease::Linear);
        if !self.playing {
            tween.pause();
        }
        self.animation = Some(LiveAnimation {
            index,
            tween,
            percent: 0,
        });
        if self.playing {
            self.correction = Some(CorrectionBinding { index, duration });
        }
        if let Some(visual) = indicator {
            self.write_active(visual, 0, viewport);
        }
        debug!(index, duration, playing = self.playing, "Progress animation activated");
    }

    /// Follow the playback intent: attach or detach the correction binding
    /// and resume or freeze the tween.
    pub fn set_playing(&mut self, playing: bool) {
        if self.playing == playing {
            return;
        }
        self.playing = playing;
        let Some(anim) = self.animation.as_mut() else {
            return;
        };
        if playing {
            anim.tween.resume();
            self.correction = Some(CorrectionBinding {
                index: anim.index,
                duration: anim.tween.duration(),
            });
        } else {
            anim.tween.pause();
            self.correction = None;
        }
        debug!(index = anim.index, playing, "Correction binding toggled");
    }

    /// Run one frame for the active clip.
    ///
    /// `media_time` is the active clip's real position, or `None` when its
    /// media is not mounted. `indicator` is the active clip's indicator;
    /// visual writes are skipped when it is not mounted.
    ///
    /// Until the animation completes, the indicator is rewritten every
    /// frame, so a resize lands on the next frame even when the position
    /// has not moved. Returns `Some` only on frames where the tween
    /// rendered.
    pub fn on_frame(
        &mut self,
        dt: f64,
        media_time: Option<f64>,
        viewport: Viewport,
        indicator: Option<&mut IndicatorVisual>,
    ) -> Option<ProgressUpdate> {
        let anim = self.animation.as_mut()?;

        let step = match (self.correction, media_time) {
            (Some(binding), Some(time)) if binding.index == anim.index => {
                if binding.duration > 0.0 {
                    anim.tween.set_progress(time / binding.duration)
                } else {
                    anim.tween.set_progress(1.0)
                }
            }
            _ => anim.tween.advance(dt),
        };

        let index = anim.index;
        let percent = percent_of(anim.tween.progress());
        if percent != anim.percent {
            trace!(index, percent, "Progress changed");
            anim.percent = percent;
        }
        // A finished clip keeps whatever its completing frame left behind.
        let resting = anim.tween.is_complete() && !step.completed;

        if let Some(visual) = indicator {
            if !resting {
                self.write_active(visual, percent, viewport);
            }
            if step.completed && self.playing {
                visual.container_width = self.layout.resting_width();
                visual.fill_color = self.inactive_color;
            }
        }

        if step.completed {
            debug!(index, "Progress animation complete");
        }
        if !step.updated {
            return None;
        }
        Some(ProgressUpdate {
            index,
            percent,
            completed: step.completed,
        })
    }

    fn write_active(&self, visual: &mut IndicatorVisual, percent: u8, viewport: Viewport) {
        visual.container_width = self.layout.indicator_width(viewport);
        visual.fill_percent = percent;
        visual.fill_color = self.active_color;
    }

    /// Index the live animation is scoped to.
    pub fn active_index(&self) -> Option<usize> {
        self.animation.as_ref().map(|a| a.index)
    }

    /// Last percent written for the active clip.
    pub fn percent(&self) -> Option<u8> {
        self.animation.as_ref().map(|a| a.percent)
    }

    pub fn correction(&self) -> Option<CorrectionBinding> {
        self.correction
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn resting_visual(&self) -> IndicatorVisual {
        IndicatorVisual::resting(self.layout.resting_width(), self.inactive_color)
    }
}
