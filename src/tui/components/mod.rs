// Components module - UI building blocks
//
// Shell components frame the deck:
// - Title bar: deck name and slide counter
// - Status bar: location, key hints, latest warning
// - Dots: one indicator per slide, clickable
// Content components:
// - Slide: the scroll-snapped slide stack with per-slide buttons
// - Notification: transient overlays in the bottom-right corner

pub mod dots;
pub mod notification;
pub mod slide;
pub mod status_bar;
pub mod title_bar;

use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title(f: &mut Frame, area: Rect, app: &App) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status(f: &mut Frame, area: Rect, app: &App) {
    status_bar::render(f, area, app);
}
