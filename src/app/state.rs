use std::time::Instant;

use crate::carousel::Carousel;
use crate::config::Config;
use crate::deck::Deck;
use crate::frame::FrameGate;
use crate::layout::LayoutRegions;
use crate::track::TrackState;

pub struct App {
    pub deck: Deck,
    pub track: TrackState,
    pub carousel: Carousel,
    /// Coalesces wheel events to one reconciliation per frame.
    pub scroll_gate: FrameGate,
    pub layout_regions: LayoutRegions,
    pub show_buttons: bool,
    pub show_dots: bool,
    pub config_warning: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(deck: Deck, config: &Config) -> Self {
        let track = TrackState::new(deck.len(), &config.carousel);
        let mut app = Self {
            deck,
            track,
            carousel: Carousel::new(),
            scroll_gate: FrameGate::new(),
            layout_regions: LayoutRegions::default(),
            show_buttons: config.controls.show_buttons,
            show_dots: config.controls.show_dots,
            config_warning: None,
            should_quit: false,
        };
        // Derived state starts consistent, before the first render
        app.carousel.update_derived_ui(&mut app.track, 0);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Per-frame bookkeeping, run right before the draw: advance the
    /// scroll animation and execute the reconciliation armed by wheel
    /// events since the last frame. The refresh reads the offset live at
    /// this point, not as it was when the first wheel event arrived.
    pub fn tick(&mut self, now: Instant) {
        self.track.tick(now);
        if self.scroll_gate.take() {
            self.carousel.refresh_from_scroll(&mut self.track);
        }
    }
}
