//! Reel Playback - Carousel playback engine
//!
//! Keeps slide position, progress indicators and media playback consistent
//! across asynchronous events:
//! - `state`: pure reducer over `PlaybackState`
//! - `readiness`: metadata gate for the first play command
//! - `progress`: per-clip tween with media-position correction
//! - `layout`: viewport breakpoints for indicator width
//! - `transition`: eased slide strip offset
//! - `Carousel`: owns all of the above and runs side effects

pub mod carousel;
pub mod config;
pub mod control;
pub mod layout;
pub mod media;
pub mod progress;
pub mod readiness;
pub mod state;
pub mod transition;

pub use carousel::{Carousel, ClipBinding};
pub use config::{CarouselConfig, LayoutConfig};
pub use control::ControlAction;
pub use layout::LayoutResponder;
pub use media::{MediaCommand, MediaElement, MediaSignal, SimulatedMedia};
pub use progress::{percent_of, CorrectionBinding, IndicatorVisual, ProgressAnimator, ProgressUpdate};
pub use readiness::ReadinessTracker;
pub use state::{reduce, Phase, PlaybackEvent, PlaybackState, Reduced};
pub use transition::TransitionController;
