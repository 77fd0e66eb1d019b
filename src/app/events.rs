use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use std::io;
use std::time::Duration;

use super::mouse;
use super::render;
use super::state::App;

/// One frame at roughly 60fps; also bounds input latency.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(FRAME_INTERVAL)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => mouse::handle_mouse(self, mouse_event),
                Event::Resize(width, height) => self.handle_resize(width, height),
                _ => {}
            }
        }
        Ok(())
    }

    /// Arrow keys are navigation: they are consumed here and never fall
    /// through to free-form track scrolling.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Left | KeyCode::Char('h') => self.carousel.step_previous(&mut self.track),
            KeyCode::Right | KeyCode::Char('l') => self.carousel.step_next(&mut self.track),
            KeyCode::Home | KeyCode::Char('g') => self.carousel.go_to(&mut self.track, 0),
            KeyCode::End | KeyCode::Char('G') => {
                self.carousel.go_to(&mut self.track, self.deck.len() as isize - 1);
            }
            KeyCode::Char(c @ '1'..='9') => {
                self.carousel.go_to(&mut self.track, c as isize - '1' as isize);
            }
            _ => {}
        }
    }

    /// Nothing caches geometry between operations, so a resize only needs
    /// the track width refreshed and the control states re-derived
    /// against the new visible count.
    pub fn handle_resize(&mut self, width: u16, height: u16) {
        let layout = render::compute_layout(
            Rect::new(0, 0, width, height),
            self.show_buttons,
            self.show_dots,
        );
        self.track.set_viewport_width(f64::from(layout.track.width));
        self.carousel.on_resize(&mut self.track);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::deck::Deck;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut app = App::new(Deck::sample(), &Config::default());
        // 80 columns: 72-wide track, stride 30, two cards visible
        app.handle_resize(80, 24);
        app
    }

    #[test]
    fn test_arrow_keys_step() {
        let mut app = app();

        app.handle_key_event(key(KeyCode::Right));
        assert_eq!(app.carousel.current(), 1);
        app.handle_key_event(key(KeyCode::Left));
        assert_eq!(app.carousel.current(), 0);
    }

    #[test]
    fn test_vim_keys_step() {
        let mut app = app();

        app.handle_key_event(key(KeyCode::Char('l')));
        assert_eq!(app.carousel.current(), 1);
        app.handle_key_event(key(KeyCode::Char('h')));
        assert_eq!(app.carousel.current(), 0);
    }

    #[test]
    fn test_left_at_first_card_stays_put() {
        let mut app = app();

        app.handle_key_event(key(KeyCode::Left));
        assert_eq!(app.carousel.current(), 0);
        assert!(!app.track.prev_enabled);
    }

    #[test]
    fn test_right_clamps_at_last_page() {
        let mut app = app();

        for _ in 0..20 {
            app.handle_key_event(key(KeyCode::Right));
        }
        // 6 cards, 2 visible: pages end at index 4
        assert_eq!(app.carousel.current(), 4);
        assert!(!app.track.next_enabled);
    }

    #[test]
    fn test_digit_jump() {
        let mut app = app();

        app.handle_key_event(key(KeyCode::Char('3')));
        assert_eq!(app.carousel.current(), 2);
        // Digit beyond the deck clamps
        app.handle_key_event(key(KeyCode::Char('9')));
        assert_eq!(app.carousel.current(), 4);
    }

    #[test]
    fn test_home_and_end() {
        let mut app = app();

        app.handle_key_event(key(KeyCode::End));
        assert_eq!(app.carousel.current(), 4);
        app.handle_key_event(key(KeyCode::Home));
        assert_eq!(app.carousel.current(), 0);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app();
            app.handle_key_event(key(code));
            assert!(app.should_quit());
        }

        let mut app = app();
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_keys_on_empty_deck_do_nothing() {
        let mut app = App::new(Deck::new(Vec::new()), &Config::default());
        app.handle_resize(80, 24);

        app.handle_key_event(key(KeyCode::Right));
        app.handle_key_event(key(KeyCode::End));
        assert_eq!(app.carousel.current(), 0);
    }

    #[test]
    fn test_resize_reenables_next_control() {
        let mut app = app();

        app.handle_key_event(key(KeyCode::End));
        assert!(!app.track.next_enabled);

        // Narrower terminal: fewer cards visible, a further page appears
        app.handle_resize(40, 24);
        assert_eq!(app.carousel.current(), 4);
        assert!(app.track.next_enabled);
    }
}
