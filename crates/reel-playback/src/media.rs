//! Media element seam.
//!
//! The carousel only ever issues `play`/`pause` and reads the playback
//! position. The host forwards the element's notifications back as
//! [`MediaSignal`]s.

use smallvec::SmallVec;
use tracing::debug;

/// A playable clip surface.
pub trait MediaElement {
    fn play(&mut self);
    fn pause(&mut self);
    /// Real playback position in seconds.
    fn current_time(&self) -> f64;
    fn is_paused(&self) -> bool;
}

/// Notifications a media element reports to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaSignal {
    /// Duration metadata is available.
    LoadedMetadata,
    /// Playback started.
    Playing,
    /// Playback reached the end of the clip.
    Ended,
}

/// A command received by a [`SimulatedMedia`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    Pause,
}

/// Deterministic in-memory media element.
///
/// Time only moves through [`SimulatedMedia::advance`], which makes it
/// usable both for tests and for driving the viewer without a decoder.
#[derive(Debug, Clone)]
pub struct SimulatedMedia {
    duration: f64,
    current_time: f64,
    paused: bool,
    ended: bool,
    metadata_delay: f64,
    metadata_loaded: bool,
    pending: SmallVec<[MediaSignal; 2]>,
    commands: Vec<MediaCommand>,
}

impl SimulatedMedia {
    /// A paused element at position 0 whose metadata loads on the first
    /// `advance`.
    pub fn new(duration: f64) -> Self {
        Self {
            duration: duration.max(0.0),
            current_time: 0.0,
            paused: true,
            ended: false,
            metadata_delay: 0.0,
            metadata_loaded: false,
            pending: SmallVec::new(),
            commands: Vec::new(),
        }
    }

    /// Delay metadata by `seconds` of advanced time. `f64::INFINITY`
    /// simulates a source that never loads.
    pub fn with_metadata_delay(mut self, seconds: f64) -> Self {
        self.metadata_delay = seconds;
        self
    }

    /// Advance by `dt` seconds, returning the signals raised meanwhile.
    pub fn advance(&mut self, dt: f64) -> SmallVec<[MediaSignal; 2]> {
        let dt = dt.max(0.0);
        let mut signals = std::mem::take(&mut self.pending);

        if !self.metadata_loaded {
            self.metadata_delay -= dt;
            if self.metadata_delay <= 0.0 {
                self.metadata_loaded = true;
                signals.push(MediaSignal::LoadedMetadata);
            }
        }

        if !self.paused && !self.ended && self.metadata_loaded {
            self.current_time = (self.current_time + dt).min(self.duration);
            if self.current_time >= self.duration {
                self.ended = true;
                self.paused = true;
                signals.push(MediaSignal::Ended);
            }
        }

        signals
    }

    /// Every command received, oldest first.
    pub fn commands(&self) -> &[MediaCommand] {
        &self.commands
    }
}

impl MediaElement for SimulatedMedia {
    fn play(&mut self) {
        self.commands.push(MediaCommand::Play);
        if self.ended {
            debug!("Rewinding ended media before play");
            self.current_time = 0.0;
            self.ended = false;
        }
        if self.paused {
            self.paused = false;
            self.pending.push(MediaSignal::Playing);
        }
    }

    fn pause(&mut self) {
        self.commands.push(MediaCommand::Pause);
        self.paused = true;
        // A play interrupted before it started never reports playing.
        self.pending.retain(|s| *s != MediaSignal::Playing);
    }

    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn is_paused(&self) -> bool {
        self.paused
    }
}
