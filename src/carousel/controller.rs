use super::geometry;
use super::host::CarouselHost;

/// Discrete model of the carousel position.
///
/// `current` drives all derived UI and is always recomputed wholesale,
/// either from a clamped navigation target or from the live scroll
/// offset. It is never incrementally patched, so it cannot drift from
/// where the viewport actually is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
}

impl Carousel {
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Index of the active card.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Navigate to `target`, clamped to the reachable range.
    ///
    /// Issues a scroll request and synchronously updates the derived UI
    /// from the clamped index; the animation is fire-and-forget and the
    /// model's intent is authoritative. An out-of-range target is a
    /// normal input, not an error. With no cards this is a no-op.
    ///
    /// Targets clamp to the last page (`count - visible`), not to
    /// `count - 1`: the viewport cannot scroll past the point where the
    /// final card is fully visible, so a larger index would only be
    /// snapped back by the next reconciliation.
    pub fn go_to<H: CarouselHost>(&mut self, host: &mut H, target: isize) {
        let count = host.card_count();
        if count == 0 {
            return;
        }
        let visible = geometry::visible_count(host.viewport_width(), host.card_width(), host.gap());
        let max_page = geometry::max_page_index(count, visible);
        let index = target.clamp(0, max_page as isize) as usize;

        let stride = geometry::stride(host.card_width(), host.gap());
        let smooth = host.smooth_scroll();
        host.request_scroll(geometry::offset_for_index(index, stride), smooth);

        self.current = index;
        self.update_derived_ui(host, index);
    }

    pub fn step_next<H: CarouselHost>(&mut self, host: &mut H) {
        self.go_to(host, self.current as isize + 1);
    }

    pub fn step_previous<H: CarouselHost>(&mut self, host: &mut H) {
        self.go_to(host, self.current as isize - 1);
    }

    /// Re-derive the current card from wherever the viewport actually is.
    ///
    /// The reconciliation step for free-form scrolling that bypasses
    /// [`Carousel::go_to`]. Reads the live offset at call time and never
    /// moves the viewport itself.
    pub fn refresh_from_scroll<H: CarouselHost>(&mut self, host: &mut H) {
        let stride = geometry::stride(host.card_width(), host.gap());
        let Some(index) = geometry::index_for_offset(host.scroll_offset(), stride, host.card_count())
        else {
            return;
        };
        self.current = index;
        self.update_derived_ui(host, index);
    }

    /// Push `index` out to the controls.
    ///
    /// Previous is disabled on the first card; next is disabled once no
    /// further page exists; exactly one indicator ends up selected. Pure
    /// function of the index and the live geometry, so calling it twice
    /// is the same as calling it once.
    pub fn update_derived_ui<H: CarouselHost>(&self, host: &mut H, index: usize) {
        let count = host.card_count();
        if count == 0 {
            return;
        }
        for dot in 0..count {
            host.set_indicator_selected(dot, dot == index);
        }
        let visible = geometry::visible_count(host.viewport_width(), host.card_width(), host.gap());
        host.set_prev_enabled(index > 0);
        host.set_next_enabled(index < geometry::max_page_index(count, visible));
    }

    /// Geometry is read fresh on every operation, so a resize only needs
    /// the control states recomputed against the new visible count.
    pub fn on_resize<H: CarouselHost>(&self, host: &mut H) {
        self.update_derived_ui(host, self.current);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
