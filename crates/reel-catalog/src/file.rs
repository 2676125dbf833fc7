//! On-disk catalog format.
//!
//! Current files are a JSON object tagged with `version`. The legacy slide
//! table is a bare JSON array of `{ id, video, videoDuration, textLists }`
//! rows and is recognised by its shape alone.

use std::path::Path;

use reel_core::{ReelError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::catalog::SlideCatalog;
use crate::clip::ClipDescriptor;

/// Version written by [`CatalogFile::to_json`].
pub const FORMAT_VERSION: u32 = 1;

/// A catalog as stored on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogFile {
    pub version: u32,
    pub catalog: SlideCatalog,
}

/// One row of the legacy slide table.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LegacySlide {
    id: u32,
    video: String,
    video_duration: f64,
    #[serde(default)]
    text_lists: Vec<String>,
}

impl From<LegacySlide> for ClipDescriptor {
    fn from(slide: LegacySlide) -> Self {
        ClipDescriptor::new(slide.id, slide.video, slide.video_duration)
            .with_captions(slide.text_lists)
    }
}

fn invalid(what: &str, err: serde_json::Error) -> ReelError {
    ReelError::Serialization(format!("{}: {}", what, err))
}

impl CatalogFile {
    pub fn new(catalog: SlideCatalog) -> Self {
        Self {
            version: FORMAT_VERSION,
            catalog,
        }
    }

    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(|e| invalid("failed to write catalog", e))
    }

    /// Parse either a versioned catalog object or a legacy slide array.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(data).map_err(|e| invalid("invalid JSON", e))?;
        if value.is_array() {
            return Self::from_legacy(value);
        }

        let fields = value.as_object().ok_or_else(|| {
            ReelError::Serialization("catalog must be a JSON object or a slide array".into())
        })?;
        let version = fields
            .get("version")
            .ok_or_else(|| ReelError::Serialization("catalog object has no `version`".into()))?
            .as_u64()
            .ok_or_else(|| ReelError::Serialization("catalog `version` must be an integer".into()))?;
        if version != u64::from(FORMAT_VERSION) {
            return Err(ReelError::Serialization(format!(
                "unsupported catalog version {} (this build reads {})",
                version, FORMAT_VERSION
            )));
        }

        serde_json::from_value(value).map_err(|e| invalid("invalid catalog", e))
    }

    fn from_legacy(value: Value) -> Result<Self> {
        let slides: Vec<LegacySlide> =
            serde_json::from_value(value).map_err(|e| invalid("invalid slide table", e))?;
        let clips = slides.into_iter().map(ClipDescriptor::from).collect();
        Ok(Self::new(SlideCatalog::new(clips)?))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}
