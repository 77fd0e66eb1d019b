//! Carousel controller
//!
//! The core of the viewer: reconciles the track's continuous scroll offset
//! with the discrete current-card model and keeps the derived controls
//! (prev/next disabled state, selected dot) consistent under button
//! clicks, key presses, free-form scrolling, and resizes.
//!
//! The controller talks to its host only through the [`CarouselHost`]
//! trait, so it can be constructed and driven in tests without a terminal.

mod controller;
mod geometry;
mod host;

pub use controller::Carousel;
pub use geometry::{
    clamp_index, index_for_offset, max_page_index, offset_for_index, stride, visible_count,
};
pub use host::CarouselHost;
