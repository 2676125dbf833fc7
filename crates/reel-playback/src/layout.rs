//! Indicator container sizing.

use reel_core::{Length, Viewport};

use crate::config::LayoutConfig;

/// Picks the active indicator container width from the viewport.
///
/// Evaluated on every progress tick and never cached, so a resize takes
/// effect on the next frame.
#[derive(Debug, Clone)]
pub struct LayoutResponder {
    config: LayoutConfig,
}

impl LayoutResponder {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Width of the container while its clip is in progress.
    pub fn indicator_width(&self, viewport: Viewport) -> Length {
        if viewport.width < self.config.narrow_max_width {
            self.config.narrow_width
        } else if viewport.height < self.config.short_max_height {
            self.config.narrow_width
        } else {
            self.config.default_width
        }
    }

    /// Width of a collapsed container.
    pub fn resting_width(&self) -> Length {
        self.config.resting_width
    }
}

impl Default for LayoutResponder {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}
