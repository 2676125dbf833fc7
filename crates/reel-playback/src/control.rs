//! The single play / pause / replay control.

use serde::{Deserialize, Serialize};

use crate::state::{PlaybackEvent, PlaybackState};

/// What the control shows and does when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlAction {
    Replay,
    Play,
    Pause,
}

impl ControlAction {
    pub fn for_state(state: &PlaybackState) -> Self {
        if state.is_last_clip {
            ControlAction::Replay
        } else if !state.is_playing {
            ControlAction::Play
        } else {
            ControlAction::Pause
        }
    }

    /// Event dispatched on click.
    pub fn event(self) -> PlaybackEvent {
        match self {
            ControlAction::Replay => PlaybackEvent::Reset,
            ControlAction::Play => PlaybackEvent::TogglePlay,
            ControlAction::Pause => PlaybackEvent::TogglePause,
        }
    }

    /// Icon name, also used as the accessible label.
    pub fn label(self) -> &'static str {
        match self {
            ControlAction::Replay => "replay",
            ControlAction::Play => "play",
            ControlAction::Pause => "pause",
        }
    }
}
