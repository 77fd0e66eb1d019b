//! deckview library - terminal card carousel
//!
//! This library exposes the carousel core and its host glue for testing
//! purposes.

pub mod anim;
pub mod app;
pub mod carousel;
pub mod config;
pub mod deck;
pub mod error;
pub mod frame;
pub mod layout;
pub mod track;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use carousel::{Carousel, CarouselHost};
pub use config::Config;
pub use deck::{Card, Deck};
