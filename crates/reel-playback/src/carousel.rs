//! The carousel orchestrator.
//!
//! Owns the playback state and every per-clip resource. Inputs arrive as
//! events; each is fully reduced (including follow-ups) before any side
//! effect runs, so media commands and animations always observe a
//! complete state.
//!
//! Hosts call [`Carousel::frame`] once per rendered frame and deliver media
//! signals collected during that frame afterwards.

use reel_catalog::SlideCatalog;
use reel_core::{FrameClock, ReelError, Result, Viewport};
use tracing::{debug, info, warn};

use crate::config::CarouselConfig;
use crate::control::ControlAction;
use crate::layout::LayoutResponder;
use crate::media::{MediaElement, MediaSignal, SimulatedMedia};
use crate::progress::{CorrectionBinding, IndicatorVisual, ProgressAnimator, ProgressUpdate};
use crate::readiness::ReadinessTracker;
use crate::state::{reduce, Phase, PlaybackEvent, PlaybackState};
use crate::transition::TransitionController;

/// Resources bound to one clip index. Either side may be unmounted.
#[derive(Debug)]
pub struct ClipBinding<M> {
    pub media: Option<M>,
    pub indicator: Option<IndicatorVisual>,
}

impl<M> Default for ClipBinding<M> {
    fn default() -> Self {
        Self {
            media: None,
            indicator: None,
        }
    }
}

/// Inputs the media side effect depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MediaIntent {
    start_requested: bool,
    active_index: usize,
    is_playing: bool,
    ready: bool,
}

pub struct Carousel<M: MediaElement> {
    catalog: SlideCatalog,
    config: CarouselConfig,
    state: PlaybackState,
    readiness: ReadinessTracker,
    bindings: Vec<ClipBinding<M>>,
    progress: ProgressAnimator,
    transition: TransitionController,
    clock: FrameClock,
    viewport: Viewport,
    visible: bool,
}

impl<M: MediaElement> Carousel<M> {
    pub fn new(catalog: SlideCatalog, config: CarouselConfig) -> Result<Self> {
        config.validate()?;

        let mut progress = ProgressAnimator::new(
            LayoutResponder::new(config.layout.clone()),
            config.active_color,
            config.inactive_color,
        );
        let first_duration = catalog.duration_of(0).ok_or_else(|| {
            ReelError::InvalidParameter("carousel needs at least one clip".into())
        })?;
        progress.activate(0, first_duration, Viewport::default(), None);

        let bindings = (0..catalog.len()).map(|_| ClipBinding::default()).collect();
        // A catalog smaller than the threshold could otherwise never start.
        let threshold = config.readiness_threshold.min(catalog.len());
        info!(clips = catalog.len(), threshold, "Carousel created");

        Ok(Self {
            readiness: ReadinessTracker::new(threshold),
            transition: TransitionController::new(config.slide_transition_seconds),
            catalog,
            config,
            state: PlaybackState::default(),
            bindings,
            progress,
            clock: FrameClock::new(),
            viewport: Viewport::default(),
            visible: false,
        })
    }

    // ── Mounting ────────────────────────────────────────────────

    /// Attach the media element for `index`.
    pub fn mount_media(&mut self, index: usize, media: M) -> Result<()> {
        let binding = self.binding_mut(index)?;
        binding.media = Some(media);
        debug!(index, "Media mounted");
        if index == self.state.active_index {
            self.sync_media();
        }
        Ok(())
    }

    /// Attach the progress indicator for `index` in its resting state.
    pub fn mount_indicator(&mut self, index: usize) -> Result<()> {
        let resting = self.progress.resting_visual();
        let binding = self.binding_mut(index)?;
        if binding.indicator.is_none() {
            binding.indicator = Some(resting);
        }
        Ok(())
    }

    fn binding_mut(&mut self, index: usize) -> Result<&mut ClipBinding<M>> {
        let count = self.bindings.len();
        self.bindings.get_mut(index).ok_or_else(|| {
            ReelError::NotFound(format!("clip index {} (catalog has {})", index, count))
        })
    }

    // ── Inputs ──────────────────────────────────────────────────

    /// Report viewport visibility. Entering view starts playback once per
    /// visibility cycle.
    pub fn set_visible(&mut self, visible: bool) {
        let entered = visible && !self.visible;
        self.visible = visible;
        if entered {
            self.dispatch(PlaybackEvent::VisibleAndLoaded);
        }
    }

    /// Route a notification from the media element at `index`.
    pub fn handle_media_signal(&mut self, index: usize, signal: MediaSignal) {
        if index >= self.bindings.len() {
            warn!(index, ?signal, "Media signal for unknown clip ignored");
            return;
        }
        match signal {
            MediaSignal::LoadedMetadata => self.record_loaded(index),
            MediaSignal::Playing => self.dispatch(PlaybackEvent::MediaPlaying(index)),
            MediaSignal::Ended if index == self.state.active_index => {
                self.dispatch(PlaybackEvent::ClipEnded(index))
            }
            MediaSignal::Ended => {
                debug!(index, active = self.state.active_index, "Stale ended signal ignored");
            }
        }
    }

    /// Click the play/pause/replay control. Returns the action taken.
    pub fn click_control(&mut self) -> ControlAction {
        let action = self.control();
        info!(action = action.label(), "Control clicked");
        self.dispatch(action.event());
        action
    }

    /// Reduce `event` (and anything it emits), then run side effects.
    pub fn dispatch(&mut self, event: PlaybackEvent) {
        let before = self.intent();
        let prev = self.state;

        let mut next = Some(event);
        while let Some(event) = next {
            let reduced = reduce(self.state, event, self.catalog.len());
            self.state = reduced.state;
            next = reduced.emitted;
            debug!(
                %event,
                index = self.state.active_index,
                playing = self.state.is_playing,
                ended = self.state.has_ended,
                last = self.state.is_last_clip,
                "Playback event reduced"
            );
        }

        self.after_transition(prev, before);
    }

    fn record_loaded(&mut self, index: usize) {
        let before = self.intent();
        if !self.readiness.record_loaded(index) {
            return;
        }
        debug!(index, loaded = self.readiness.count(), "Clip metadata loaded");
        if self.intent() != before {
            info!(loaded = self.readiness.count(), "Readiness threshold reached");
            self.sync_media();
        }
    }

    // ── Side effects ────────────────────────────────────────────

    fn after_transition(&mut self, prev: PlaybackState, before: MediaIntent) {
        let state = self.state;
        let index_changed = state.active_index != prev.active_index;
        let started = state.start_requested && !prev.start_requested;
        let restarted = prev.is_last_clip && !state.is_last_clip;

        if started {
            info!("Carousel start requested");
        }
        if state.is_last_clip && !prev.is_last_clip {
            info!(index = state.active_index, "Last clip finished");
        }
        if restarted {
            info!("Carousel reset to first clip");
        }

        self.progress.set_playing(state.is_playing);

        if index_changed {
            self.transition.on_active_index_changed(state.active_index);
        }
        if index_changed || started || restarted {
            if let Some(duration) = self.catalog.duration_of(state.active_index) {
                let indicator = self
                    .bindings
                    .get_mut(state.active_index)
                    .and_then(|b| b.indicator.as_mut());
                self.progress
                    .activate(state.active_index, duration, self.viewport, indicator);
            }
        }

        if restarted || self.intent() != before {
            self.sync_media();
        }
    }

    /// Issue play/pause to the active clip's media. No-op until readiness
    /// is met or while the active media is not mounted.
    fn sync_media(&mut self) {
        if !self.readiness.is_ready() {
            return;
        }
        let state = self.state;
        let Some(media) = self
            .bindings
            .get_mut(state.active_index)
            .and_then(|b| b.media.as_mut())
        else {
            debug!(index = state.active_index, "Active media not mounted");
            return;
        };

        if !state.is_playing {
            debug!(index = state.active_index, "Pausing active media");
            media.pause();
        } else if state.start_requested && !state.is_last_clip {
            debug!(index = state.active_index, "Playing active media");
            media.play();
        }
    }

    fn intent(&self) -> MediaIntent {
        MediaIntent {
            start_requested: self.state.start_requested,
            active_index: self.state.active_index,
            is_playing: self.state.is_playing,
            ready: self.readiness.is_ready(),
        }
    }

    // ── Frame ───────────────────────────────────────────────────

    /// Advance animations by one frame of `dt` seconds.
    pub fn frame(&mut self, dt: f64, viewport: Viewport) -> Option<ProgressUpdate> {
        let tick = self.clock.tick(dt);
        self.viewport = viewport;
        self.transition.tick(tick.delta);

        let index = self.progress.active_index()?;
        let binding = self.bindings.get_mut(index)?;
        let media_time = binding.media.as_ref().map(|m| m.current_time());
        self.progress
            .on_frame(tick.delta, media_time, viewport, binding.indicator.as_mut())
    }

    // ── Accessors ───────────────────────────────────────────────

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase(self.readiness.is_ready())
    }

    pub fn control(&self) -> ControlAction {
        ControlAction::for_state(&self.state)
    }

    pub fn catalog(&self) -> &SlideCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn readiness(&self) -> &ReadinessTracker {
        &self.readiness
    }

    pub fn clip_count(&self) -> usize {
        self.bindings.len()
    }

    pub fn indicator(&self, index: usize) -> Option<&IndicatorVisual> {
        self.bindings.get(index)?.indicator.as_ref()
    }

    pub fn media(&self, index: usize) -> Option<&M> {
        self.bindings.get(index)?.media.as_ref()
    }

    pub fn media_mut(&mut self, index: usize) -> Option<&mut M> {
        self.bindings.get_mut(index)?.media.as_mut()
    }

    /// Slide strip offset in percent of one slide width.
    pub fn slide_offset_percent(&self) -> f64 {
        self.transition.offset_percent()
    }

    /// Progress of the active clip as last written.
    pub fn progress_percent(&self) -> Option<u8> {
        self.progress.percent()
    }

    pub fn correction(&self) -> Option<CorrectionBinding> {
        self.progress.correction()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame()
    }
}

impl Carousel<SimulatedMedia> {
    /// Build a carousel with a simulated media element and a mounted
    /// indicator for every clip.
    pub fn simulated(catalog: SlideCatalog, config: CarouselConfig) -> Result<Self> {
        let mut carousel = Self::new(catalog, config)?;
        for index in 0..carousel.clip_count() {
            let duration = carousel.catalog.duration_of(index).unwrap_or_default();
            carousel.mount_media(index, SimulatedMedia::new(duration))?;
            carousel.mount_indicator(index)?;
        }
        Ok(carousel)
    }

    /// Advance every simulated element, run the frame, then deliver the
    /// signals the elements raised.
    pub fn step_simulated(&mut self, dt: f64, viewport: Viewport) -> Option<ProgressUpdate> {
        let mut signals = Vec::new();
        for (index, binding) in self.bindings.iter_mut().enumerate() {
            if let Some(media) = binding.media.as_mut() {
                signals.extend(media.advance(dt).into_iter().map(|s| (index, s)));
            }
        }

        let update = self.frame(dt, viewport);

        for (index, signal) in signals {
            self.handle_media_signal(index, signal);
        }
        update
    }
}
