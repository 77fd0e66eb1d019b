//! Card rendering
//!
//! Draws one card of the deck into the given area. Cards at the track
//! edges arrive pre-clipped, so a card may render with a truncated
//! border; that is how a partially scrolled-in card looks.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::deck::Card;

/// Render a single card, highlighted when it is the active one.
pub fn render_card(frame: &mut Frame, area: Rect, card: &Card, active: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let border_style = if active {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::from(card.title.as_str()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let body: Vec<Line> = card.body.iter().map(|line| Line::from(line.as_str())).collect();
    frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: false }), inner);
}
