//! Viewport dimensions and CSS-style lengths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Current viewport size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A length that may depend on the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute logical pixels.
    Px(f32),
    /// Percentage of the viewport width.
    Vw(f32),
    /// Percentage of the viewport height.
    Vh(f32),
}

impl Length {
    /// Resolve to logical pixels for the given viewport.
    pub fn to_px(self, viewport: Viewport) -> f32 {
        match self {
            Length::Px(px) => px,
            Length::Vw(v) => viewport.width * v / 100.0,
            Length::Vh(v) => viewport.height * v / 100.0,
        }
    }

    /// Whether the value is finite and non-negative.
    pub fn is_valid(self) -> bool {
        let v = match self {
            Length::Px(v) | Length::Vw(v) | Length::Vh(v) => v,
        };
        v.is_finite() && v >= 0.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(v) => write!(f, "{}px", v),
            Length::Vw(v) => write!(f, "{}vw", v),
            Length::Vh(v) => write!(f, "{}vh", v),
        }
    }
}
