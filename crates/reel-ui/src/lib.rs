//! Reel UI - egui viewer for the highlight carousel
//!
//! Provides:
//! - Carousel view (slide strip, indicator row, control button)
//! - Theme palette
//! - Width smoothing for indicators

pub mod anim;
pub mod carousel_view;
pub mod theme;

pub use anim::AnimFloat;
pub use carousel_view::{control_glyph, slide_x, CarouselView, ViewResponse};
pub use theme::Theme;
