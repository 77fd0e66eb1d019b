//! Mouse handling
//!
//! Clicks on the controls map to discrete navigation; wheel movement over
//! the track is free-form scrolling that the frame-gated reconciliation
//! folds back into the index model.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::state::App;
use crate::layout::{self, Region};

/// Columns moved per wheel detent.
const WHEEL_SCROLL_COLUMNS: f64 = 4.0;

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let region = layout::region_at(&app.layout_regions, mouse.column, mouse.row);
            handle_click(app, region);
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            handle_wheel(app, &mouse, -WHEEL_SCROLL_COLUMNS);
        }
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            handle_wheel(app, &mouse, WHEEL_SCROLL_COLUMNS);
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        // Disabled controls swallow the click
        Some(Region::PrevControl) if app.track.prev_enabled => {
            app.carousel.step_previous(&mut app.track);
        }
        Some(Region::NextControl) if app.track.next_enabled => {
            app.carousel.step_next(&mut app.track);
        }
        Some(Region::Dot(index)) => app.carousel.go_to(&mut app.track, index as isize),
        _ => {}
    }
}

/// Move the raw offset and arm the gate; the index model catches up once
/// per frame, reading the offset live at that point.
fn handle_wheel(app: &mut App, mouse: &MouseEvent, delta: f64) {
    let region = layout::region_at(&app.layout_regions, mouse.column, mouse.row);
    if region != Some(Region::Track) {
        return;
    }
    app.track.scroll_by(delta);
    app.scroll_gate.arm();
}
