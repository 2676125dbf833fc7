//! Reel Catalog - Slide catalog data model
//!
//! Static, ordered clip descriptors and their on-disk format:
//! - Clip descriptors (source, duration, captions)
//! - The validated slide catalog
//! - JSON catalog files, including the legacy slide table

pub mod catalog;
pub mod clip;
pub mod file;

pub use catalog::SlideCatalog;
pub use clip::{CaptionLines, ClipDescriptor};
pub use file::{CatalogFile, FORMAT_VERSION};
