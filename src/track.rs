//! Track state — the concrete carousel host
//!
//! Owns the live viewport geometry, the continuous scroll offset (plus
//! the tween animating it), and the state of the navigation controls.
//! The render pass reads this state; the carousel controller drives it
//! through the [`CarouselHost`] contract.

use std::time::{Duration, Instant};

use crate::anim::Tween;
use crate::carousel::CarouselHost;
use crate::config::CarouselConfig;

#[derive(Debug, Clone)]
pub struct TrackState {
    /// Continuous scroll offset in columns, always within
    /// `[0, max_offset]`.
    pub offset: f64,
    /// In-flight smooth-scroll animation, if any.
    tween: Option<Tween>,
    /// Width of the track area as of the last render or resize.
    pub viewport_width: f64,
    pub card_count: usize,
    pub card_width: f64,
    pub gap: f64,
    /// Whether scroll requests animate or jump.
    pub smooth: bool,
    animation: Duration,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    dots: Vec<bool>,
}

impl TrackState {
    pub fn new(card_count: usize, config: &CarouselConfig) -> Self {
        Self {
            offset: 0.0,
            tween: None,
            viewport_width: 0.0,
            card_count,
            card_width: f64::from(config.card_width),
            gap: f64::from(config.gap),
            smooth: config.smooth_scroll,
            animation: Duration::from_millis(config.animation_ms),
            prev_enabled: false,
            next_enabled: false,
            dots: vec![false; card_count],
        }
    }

    /// Total width of all cards and the gaps between them.
    pub fn content_width(&self) -> f64 {
        if self.card_count == 0 {
            return 0.0;
        }
        self.card_count as f64 * (self.card_width + self.gap) - self.gap
    }

    /// Largest offset the viewport can actually reach.
    pub fn max_offset(&self) -> f64 {
        (self.content_width() - self.viewport_width).max(0.0)
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Advance the scroll animation. Called once per frame.
    pub fn tick(&mut self, now: Instant) {
        if let Some(tween) = self.tween {
            self.offset = tween.sample(now);
            if tween.is_done(now) {
                self.tween = None;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Free-form scroll by `delta` columns, as from a mouse wheel.
    ///
    /// The user taking over cancels any in-flight animation; the offset
    /// clamps to the reachable range instead of erroring at the edges.
    pub fn scroll_by(&mut self, delta: f64) {
        self.tween = None;
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    pub fn dots(&self) -> &[bool] {
        &self.dots
    }

    pub fn selected_dot(&self) -> Option<usize> {
        self.dots.iter().position(|selected| *selected)
    }
}

impl CarouselHost for TrackState {
    fn card_count(&self) -> usize {
        self.card_count
    }

    fn card_width(&self) -> f64 {
        self.card_width
    }

    fn gap(&self) -> f64 {
        self.gap
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn scroll_offset(&self) -> f64 {
        self.offset
    }

    fn smooth_scroll(&self) -> bool {
        self.smooth
    }

    fn request_scroll(&mut self, offset: f64, smooth: bool) {
        // The viewport cannot render past its content
        let target = offset.clamp(0.0, self.max_offset());
        if smooth {
            let now = Instant::now();
            match &mut self.tween {
                // Last write wins: redirect the in-flight animation
                Some(tween) => tween.retarget(now, target, self.animation),
                None => self.tween = Some(Tween::new(self.offset, target, now, self.animation)),
            }
        } else {
            self.tween = None;
            self.offset = target;
        }
    }

    fn set_prev_enabled(&mut self, enabled: bool) {
        self.prev_enabled = enabled;
    }

    fn set_next_enabled(&mut self, enabled: bool) {
        self.next_enabled = enabled;
    }

    fn set_indicator_selected(&mut self, index: usize, selected: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = selected;
        }
    }
}
