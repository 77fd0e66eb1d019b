//! Navigation control rendering
//!
//! Prev/next buttons and the indicator dot row. Disabled controls stay on
//! screen but render dimmed, matching their unclickable state.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Render a previous/next button centered in its area.
pub fn render_nav_button(frame: &mut Frame, area: Rect, symbol: &str, enabled: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let style = if enabled {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Single glyph on the vertical midline of the track
    let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(symbol, style))).centered(),
        row,
    );
}

/// Render the dot row centered in its area.
///
/// Returns the hit region of each dot, paired with its card index, for
/// click routing.
pub fn render_dots(frame: &mut Frame, area: Rect, dots: &[bool]) -> Vec<(Rect, usize)> {
    if area.width == 0 || area.height == 0 || dots.is_empty() {
        return Vec::new();
    }

    // One glyph per dot, one column of air between them
    let total = (dots.len() * 2 - 1) as u16;
    if total > area.width {
        return Vec::new();
    }
    let start_x = area.x + (area.width - total) / 2;

    let mut spans = Vec::with_capacity(dots.len() * 2);
    let mut regions = Vec::with_capacity(dots.len());
    for (index, selected) in dots.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(" "));
        }
        let (glyph, style) = if *selected {
            ("●", Style::default().fg(Color::Yellow))
        } else {
            ("○", Style::default().fg(Color::DarkGray))
        };
        spans.push(Span::styled(glyph, style));
        regions.push((Rect::new(start_x + (index as u16) * 2, area.y, 1, 1), index));
    }

    let row = Rect::new(start_x, area.y, total, 1);
    frame.render_widget(Paragraph::new(Line::from(spans)), row);
    regions
}
