// Configuration type definitions

use serde::Deserialize;

/// Carousel geometry and animation section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CarouselConfig {
    /// Card width in terminal columns
    #[serde(default = "default_card_width")]
    pub card_width: u16,
    /// Gap between adjacent cards in columns
    #[serde(default = "default_gap")]
    pub gap: u16,
    /// Animate scroll requests instead of jumping
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
}

fn default_card_width() -> u16 {
    28
}

fn default_gap() -> u16 {
    2
}

fn default_smooth_scroll() -> bool {
    true
}

fn default_animation_ms() -> u64 {
    240
}

impl Default for CarouselConfig {
    fn default() -> Self {
        CarouselConfig {
            card_width: default_card_width(),
            gap: default_gap(),
            smooth_scroll: default_smooth_scroll(),
            animation_ms: default_animation_ms(),
        }
    }
}

/// Navigation controls section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ControlsConfig {
    /// Show the previous/next buttons
    #[serde(default = "default_show_buttons")]
    pub show_buttons: bool,
    /// Show the indicator dots
    #[serde(default = "default_show_dots")]
    pub show_dots: bool,
}

fn default_show_buttons() -> bool {
    true
}

fn default_show_dots() -> bool {
    true
}

impl Default for ControlsConfig {
    fn default() -> Self {
        ControlsConfig {
            show_buttons: default_show_buttons(),
            show_dots: default_show_dots(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub controls: ControlsConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
