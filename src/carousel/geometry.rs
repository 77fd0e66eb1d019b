//! Pure index/offset arithmetic
//!
//! Everything that maps between the continuous scroll offset and the
//! discrete card index lives here, free of terminal types, so the
//! mapping is testable without any rendering environment. Nothing is
//! cached: callers pass the live geometry on every call because a resize
//! can change it at any time.

/// Distance between the starts of consecutive cards.
pub fn stride(card_width: f64, gap: f64) -> f64 {
    card_width + gap
}

/// Clamp a possibly out-of-range target into `[0, count-1]`.
/// Returns `None` when there are no cards.
pub fn clamp_index(target: isize, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(target.clamp(0, count as isize - 1) as usize)
}

/// Derive the discrete index from a continuous scroll offset.
///
/// A zero or negative stride means the cards have not laid out yet; that
/// degenerate case maps to index 0 rather than an error.
pub fn index_for_offset(offset: f64, stride: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }
    if stride <= 0.0 {
        return Some(0);
    }
    clamp_index((offset / stride).round() as isize, count)
}

/// Scroll offset that left-aligns the given card.
pub fn offset_for_index(index: usize, stride: f64) -> f64 {
    index as f64 * stride
}

/// Number of cards that fully fit in the viewport, never less than one.
///
/// `n` cards occupy `n * stride - gap` columns, so `n` fits while
/// `n <= (viewport + gap) / stride`. Floor, not round: a partially
/// visible card does not count, which keeps the next-control state stable
/// when fractional widths land near a boundary.
pub fn visible_count(viewport_width: f64, card_width: f64, gap: f64) -> usize {
    let s = stride(card_width, gap);
    if s <= 0.0 {
        return 1;
    }
    let fit = ((viewport_width.max(0.0) + gap) / s).floor();
    (fit as usize).max(1)
}

/// Last index reachable by navigation: the page on which the final card
/// is fully visible. Scrolling further would show nothing new.
pub fn max_page_index(count: usize, visible: usize) -> usize {
    count.saturating_sub(visible.max(1))
}
