//! Reusable rendering utilities for the carousel chrome

mod card;
mod controls;

pub use card::render_card;
pub use controls::{render_dots, render_nav_button};
