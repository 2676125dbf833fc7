//! Clip descriptors.

use reel_core::{ReelError, Result};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Caption lines shown over a slide. Most slides have two or three.
pub type CaptionLines = SmallVec<[String; 3]>;

/// An immutable catalog entry describing one clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipDescriptor {
    /// Stable clip ID
    pub id: u32,
    /// Location of the media source
    pub source_uri: String,
    /// Declared duration in seconds, used to normalize progress
    pub duration_seconds: f64,
    /// Caption lines, top to bottom
    #[serde(default)]
    pub caption_lines: CaptionLines,
}

impl ClipDescriptor {
    /// Create a new clip descriptor without captions.
    pub fn new(id: u32, source_uri: impl Into<String>, duration_seconds: f64) -> Self {
        Self {
            id,
            source_uri: source_uri.into(),
            duration_seconds,
            caption_lines: SmallVec::new(),
        }
    }

    /// Builder-style caption setter.
    pub fn with_captions<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.caption_lines = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Check that the descriptor can drive progress normalization.
    pub fn validate(&self) -> Result<()> {
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(ReelError::InvalidParameter(format!(
                "clip {} has invalid duration {}",
                self.id, self.duration_seconds
            )));
        }
        if self.source_uri.trim().is_empty() {
            return Err(ReelError::InvalidParameter(format!(
                "clip {} has an empty source URI",
                self.id
            )));
        }
        Ok(())
    }
}
