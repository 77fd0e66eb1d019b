//! Host-environment contract for the carousel controller

/// What the controller needs from its host: a scrollable viewport, an
/// ordered sequence of equal-width cards, and optional navigation
/// controls.
///
/// Geometry accessors must reflect the live layout on every call; the
/// controller never caches them, so a resize between two operations is
/// picked up automatically. Control setters may be no-ops when the host
/// renders without that control.
pub trait CarouselHost {
    /// Number of cards in the track.
    fn card_count(&self) -> usize;

    /// Rendered width of one card, in columns.
    fn card_width(&self) -> f64;

    /// Gap between adjacent cards, in columns.
    fn gap(&self) -> f64;

    /// Current rendered width of the viewport.
    fn viewport_width(&self) -> f64;

    /// Live scroll offset of the viewport.
    fn scroll_offset(&self) -> f64;

    /// Whether animated scrolling is available.
    fn smooth_scroll(&self) -> bool;

    /// Ask the viewport to scroll to `offset`, animated when `smooth`.
    ///
    /// Fire-and-forget: the controller never waits for the move to finish,
    /// and a later request simply supersedes an in-flight one.
    fn request_scroll(&mut self, offset: f64, smooth: bool);

    /// Enable or disable the previous control.
    fn set_prev_enabled(&mut self, enabled: bool);

    /// Enable or disable the next control.
    fn set_next_enabled(&mut self, enabled: bool);

    /// Mark the indicator for `index` as selected or not.
    fn set_indicator_selected(&mut self, index: usize, selected: bool);
}
