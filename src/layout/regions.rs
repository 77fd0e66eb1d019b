//! Rendered-region tracking for mouse interaction

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The scrollable card track.
    Track,
    /// Previous-card button.
    PrevControl,
    /// Next-card button.
    NextControl,
    /// Indicator dot for the given card index.
    Dot(usize),
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` (or empty, for
/// dots) when the component is not visible. Mouse handlers use this to
/// find the component under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub track: Option<Rect>,
    pub prev_control: Option<Rect>,
    pub next_control: Option<Rect>,
    /// One entry per rendered dot, with its card index.
    pub dots: Vec<(Rect, usize)>,
}

impl LayoutRegions {
    /// Reset before a render pass so stale regions never catch clicks.
    pub fn clear(&mut self) {
        self.track = None;
        self.prev_control = None;
        self.next_control = None;
        self.dots.clear();
    }
}
