//! Reel Core - Foundation types for the highlight carousel
//!
//! This crate provides the primitives shared by the playback engine and
//! the viewer:
//! - Errors (ReelError, Result)
//! - Animation primitives (FrameClock, Tween, Ease)
//! - Indicator colors and viewport-relative lengths

pub mod clock;
pub mod color;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod tween;

pub use clock::{FrameClock, FrameTick};
pub use color::Color;
pub use easing::Ease;
pub use error::{ReelError, Result};
pub use geometry::{Length, Viewport};
pub use tween::{Tween, TweenStep};
