//! The ordered slide catalog.

use reel_core::{ReelError, Result};
use serde::{Deserialize, Serialize};

use crate::clip::ClipDescriptor;

/// Ordered, validated list of clips. Loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog", into = "RawCatalog")]
pub struct SlideCatalog {
    clips: Vec<ClipDescriptor>,
}

#[derive(Serialize, Deserialize)]
struct RawCatalog {
    clips: Vec<ClipDescriptor>,
}

impl TryFrom<RawCatalog> for SlideCatalog {
    type Error = ReelError;

    fn try_from(raw: RawCatalog) -> Result<Self> {
        Self::new(raw.clips)
    }
}

impl From<SlideCatalog> for RawCatalog {
    fn from(catalog: SlideCatalog) -> Self {
        Self {
            clips: catalog.clips,
        }
    }
}

impl SlideCatalog {
    /// Build a catalog, validating every clip.
    ///
    /// Fails on an empty list, a clip with a non-positive duration, or
    /// duplicate clip IDs.
    pub fn new(clips: Vec<ClipDescriptor>) -> Result<Self> {
        if clips.is_empty() {
            return Err(ReelError::InvalidParameter(
                "slide catalog must contain at least one clip".into(),
            ));
        }
        for (i, clip) in clips.iter().enumerate() {
            clip.validate()?;
            if clips[..i].iter().any(|other| other.id == clip.id) {
                return Err(ReelError::InvalidParameter(format!(
                    "duplicate clip id {}",
                    clip.id
                )));
            }
        }
        Ok(Self { clips })
    }

    /// The four-clip highlight reel of the reference deployment.
    pub fn highlights() -> Self {
        Self {
            clips: vec![
                ClipDescriptor::new(1, "assets/videos/highlight-first.mp4", 4.0)
                    .with_captions(["Enter A17 Pro.", "Game-changing chip.", "Groundbreaking performance."]),
                ClipDescriptor::new(2, "assets/videos/highlight-second.mp4", 5.0)
                    .with_captions(["Titanium.", "So strong. So light. So Pro."]),
                ClipDescriptor::new(3, "assets/videos/highlight-third.mp4", 2.0)
                    .with_captions(["iPhone 15 Pro Max has the", "longest optical zoom in", "iPhone ever. Far out."]),
                ClipDescriptor::new(4, "assets/videos/highlight-fourth.mp4", 3.63)
                    .with_captions(["All-new Action button.", "What will yours do?"]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    /// Always false for a constructed catalog; kept for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ClipDescriptor> {
        self.clips.get(index)
    }

    pub fn clips(&self) -> &[ClipDescriptor] {
        &self.clips
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClipDescriptor> {
        self.clips.iter()
    }

    /// Index of the final clip.
    pub fn last_index(&self) -> usize {
        self.clips.len().saturating_sub(1)
    }

    /// Declared duration of the clip at `index`.
    pub fn duration_of(&self, index: usize) -> Option<f64> {
        self.clips.get(index).map(|c| c.duration_seconds)
    }

    /// Sum of all declared durations.
    pub fn total_duration(&self) -> f64 {
        self.clips.iter().map(|c| c.duration_seconds).sum()
    }
}

impl<'a> IntoIterator for &'a SlideCatalog {
    type Item = &'a ClipDescriptor;
    type IntoIter = std::slice::Iter<'a, ClipDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.clips.iter()
    }
}
