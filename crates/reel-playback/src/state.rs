//! Playback state machine.
//!
//! All mutations go through [`reduce`], a pure function from the current
//! state and an event to the next state. Side effects (media commands,
//! animations) are the caller's job and run only after the reduction and
//! any follow-up event it emits have been applied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The single source of truth for which clip is active and what the user
/// wants it to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Index of the active clip, `< clip_count`.
    pub active_index: usize,
    /// The previous clip just completed and the next one has not started.
    pub has_ended: bool,
    /// The final clip has completed.
    pub is_last_clip: bool,
    /// The carousel has been brought into view.
    pub start_requested: bool,
    /// Desired playback intent (not the media element's actual state).
    pub is_playing: bool,
}

/// Named inputs to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// The carousel region became visible.
    VisibleAndLoaded,
    /// The clip at this index finished playing.
    ClipEnded(usize),
    /// The final clip finished playing.
    ClipIsLast,
    /// Restart the sequence from the first clip.
    Reset,
    TogglePlay,
    TogglePause,
    /// The media element at this index reported that playback started.
    MediaPlaying(usize),
}

impl fmt::Display for PlaybackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackEvent::VisibleAndLoaded => f.write_str("visible-and-loaded"),
            PlaybackEvent::ClipEnded(i) => write!(f, "clip-ended({})", i),
            PlaybackEvent::ClipIsLast => f.write_str("clip-is-last"),
            PlaybackEvent::Reset => f.write_str("reset"),
            PlaybackEvent::TogglePlay => f.write_str("toggle-play"),
            PlaybackEvent::TogglePause => f.write_str("toggle-pause"),
            PlaybackEvent::MediaPlaying(i) => write!(f, "media-playing({})", i),
        }
    }
}

/// Result of a single reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduced {
    pub state: PlaybackState,
    /// Event the dispatcher must apply next, before running side effects.
    pub emitted: Option<PlaybackEvent>,
}

impl Reduced {
    fn state(state: PlaybackState) -> Self {
        Self {
            state,
            emitted: None,
        }
    }
}

/// Apply `event` to `state` for a catalog of `clip_count` clips.
///
/// Events that reference an index outside the catalog leave the state
/// untouched.
pub fn reduce(state: PlaybackState, event: PlaybackEvent, clip_count: usize) -> Reduced {
    match event {
        PlaybackEvent::VisibleAndLoaded => Reduced::state(PlaybackState {
            start_requested: true,
            is_playing: true,
            ..state
        }),
        PlaybackEvent::ClipEnded(i) if i >= clip_count => Reduced::state(state),
        PlaybackEvent::ClipEnded(i) if i + 1 == clip_count => Reduced {
            state,
            emitted: Some(PlaybackEvent::ClipIsLast),
        },
        PlaybackEvent::ClipEnded(i) => Reduced::state(PlaybackState {
            has_ended: true,
            active_index: i + 1,
            ..state
        }),
        PlaybackEvent::ClipIsLast => Reduced::state(PlaybackState {
            is_last_clip: true,
            has_ended: false,
            ..state
        }),
        PlaybackEvent::Reset => Reduced::state(PlaybackState {
            is_last_clip: false,
            has_ended: false,
            active_index: 0,
            ..state
        }),
        PlaybackEvent::TogglePlay | PlaybackEvent::TogglePause => Reduced::state(PlaybackState {
            is_playing: !state.is_playing,
            ..state
        }),
        PlaybackEvent::MediaPlaying(i) if i == state.active_index => {
            Reduced::state(PlaybackState {
                is_playing: true,
                has_ended: false,
                ..state
            })
        }
        PlaybackEvent::MediaPlaying(_) => Reduced::state(state),
    }
}

// ── Phases ──────────────────────────────────────────────────────

/// Coarse lifecycle phase derived from the state and readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Not yet brought into view.
    Idle,
    /// Start requested but too few clips have metadata.
    AwaitingReadiness,
    Playing,
    Paused,
    /// A clip ended and the next one is queued but not yet started.
    Advancing,
    /// The final clip ended; waiting for a reset.
    LastEnded,
}

impl PlaybackState {
    pub fn phase(&self, ready: bool) -> Phase {
        if self.is_last_clip {
            Phase::LastEnded
        } else if !self.start_requested {
            Phase::Idle
        } else if !ready {
            Phase::AwaitingReadiness
        } else if self.has_ended {
            Phase::Advancing
        } else if self.is_playing {
            Phase::Playing
        } else {
            Phase::Paused
        }
    }
}
