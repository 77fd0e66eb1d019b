use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::widgets;

/// Width of the prev/next button columns.
const BUTTON_WIDTH: u16 = 4;

/// Screen areas for one frame.
pub struct AppLayout {
    pub prev: Option<Rect>,
    pub track: Rect,
    pub next: Option<Rect>,
    pub dots: Option<Rect>,
    pub footer: Rect,
}

/// Split the terminal area into track, controls, dot row, and footer.
///
/// Shared by the render pass and the resize handler, so the viewport
/// width the controller sees always matches what is on screen.
pub fn compute_layout(area: Rect, show_buttons: bool, show_dots: bool) -> AppLayout {
    let dots_height = if show_dots { 1 } else { 0 };
    let [main, dots, footer] = Layout::vertical([
        Constraint::Min(3),
        Constraint::Length(dots_height),
        Constraint::Length(1),
    ])
    .areas(area);

    let (prev, track, next) = if show_buttons {
        let [prev, track, next] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(1),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(main);
        (Some(prev), track, Some(next))
    } else {
        (None, main, None)
    };

    AppLayout {
        prev,
        track,
        next,
        dots: show_dots.then_some(dots),
        footer,
    }
}

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = compute_layout(frame.area(), self.show_buttons, self.show_dots);

        self.layout_regions.clear();
        self.layout_regions.track = Some(layout.track);
        // The controller reads this width on its next operation
        self.track.set_viewport_width(f64::from(layout.track.width));

        if self.deck.is_empty() {
            let placeholder = Paragraph::new("Deck is empty")
                .style(Style::default().fg(Color::DarkGray))
                .centered();
            frame.render_widget(placeholder, layout.track);
        } else {
            self.render_track(frame, layout.track);
        }

        if let Some(area) = layout.prev {
            widgets::render_nav_button(frame, area, "◀", self.track.prev_enabled);
            self.layout_regions.prev_control = Some(area);
        }
        if let Some(area) = layout.next {
            widgets::render_nav_button(frame, area, "▶", self.track.next_enabled);
            self.layout_regions.next_control = Some(area);
        }
        if let Some(area) = layout.dots
            && !self.deck.is_empty()
        {
            self.layout_regions.dots = widgets::render_dots(frame, area, self.track.dots());
        }

        self.render_footer(frame, layout.footer);
    }

    /// Draw every card that intersects the track window, clipped to it.
    fn render_track(&self, frame: &mut Frame, area: Rect) {
        let stride = self.track.card_width + self.track.gap;
        let window = f64::from(area.width);

        for (index, card) in self.deck.cards().iter().enumerate() {
            // Track-local horizontal extent of this card
            let left = index as f64 * stride - self.track.offset;
            let right = left + self.track.card_width;
            if right <= 0.0 || left >= window {
                continue;
            }

            let clipped_left = left.max(0.0).round() as u16;
            let clipped_right = right.min(window).round() as u16;
            if clipped_right <= clipped_left {
                continue;
            }

            let card_area = Rect::new(
                area.x + clipped_left,
                area.y,
                clipped_right - clipped_left,
                area.height,
            );
            widgets::render_card(frame, card_area, card, index == self.carousel.current());
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            format!(
                " card {}/{}",
                self.carousel.current() + usize::from(!self.deck.is_empty()),
                self.deck.len()
            ),
            Style::default().fg(Color::Cyan),
        )];
        spans.push(Span::styled(
            "  ←/→ move · 1-9 jump · q quit",
            Style::default().fg(Color::DarkGray),
        ));
        if let Some(warning) = &self.config_warning {
            spans.push(Span::styled(
                format!("  {}", warning),
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
