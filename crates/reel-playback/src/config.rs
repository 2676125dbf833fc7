//! Carousel configuration.
//!
//! Every field has a default matching the reference deployment, so a
//! config file only needs to list what it overrides.

use reel_core::{Color, Length, ReelError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Indicator sizing rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Viewports narrower than this use `narrow_width`.
    pub narrow_max_width: f32,
    /// Viewports shorter than this use `narrow_width`.
    pub short_max_height: f32,
    /// Active container width on small viewports.
    pub narrow_width: Length,
    /// Active container width on large viewports.
    pub default_width: Length,
    /// Collapsed container width.
    pub resting_width: Length,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            narrow_max_width: 760.0,
            short_max_height: 1200.0,
            narrow_width: Length::Vw(10.0),
            default_width: Length::Vw(4.0),
            resting_width: Length::Px(12.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Distinct clips that must report metadata before the first play.
    pub readiness_threshold: usize,
    pub layout: LayoutConfig,
    /// Duration of the slide strip transition in seconds.
    pub slide_transition_seconds: f64,
    /// Fill color while a clip is in progress.
    pub active_color: Color,
    /// Fill color at rest.
    pub inactive_color: Color,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            readiness_threshold: 4,
            layout: LayoutConfig::default(),
            slide_transition_seconds: 2.0,
            active_color: Color::WHITE,
            inactive_color: Color::SILVER,
        }
    }
}

impl CarouselConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let config: Self = serde_json::from_slice(data)
            .map_err(|e| ReelError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| ReelError::Serialization(format!("Failed to serialize config: {}", e)))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.slide_transition_seconds.is_finite() || self.slide_transition_seconds < 0.0 {
            return Err(ReelError::Config(format!(
                "slide_transition_seconds must be non-negative, got {}",
                self.slide_transition_seconds
            )));
        }
        let layout = &self.layout;
        for (name, length) in [
            ("narrow_width", layout.narrow_width),
            ("default_width", layout.default_width),
            ("resting_width", layout.resting_width),
        ] {
            if !length.is_valid() {
                return Err(ReelError::Config(format!("layout.{} is invalid: {}", name, length)));
            }
        }
        if !(layout.narrow_max_width.is_finite() && layout.short_max_height.is_finite()) {
            return Err(ReelError::Config("layout breakpoints must be finite".into()));
        }
        Ok(())
    }
}
