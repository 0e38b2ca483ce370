// Dot indicator column
//
// One dot per slide, vertically centered beside the viewport. Exactly one
// dot is active. Each dot registers itself as a click target.

use crate::tui::app::{App, HitTarget};
use ratatui::{layout::Rect, style::Style, Frame};

const ACTIVE: &str = "●";
const INACTIVE: &str = "○";

pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let dots = app.coordinator.controls().dots();
    let count = u16::try_from(dots.len()).unwrap_or(u16::MAX);
    let first_row = area.y + area.height.saturating_sub(count) / 2;
    let column = area.x + area.width / 2;

    let mut targets = Vec::new();
    for (index, dot) in dots.iter().enumerate() {
        let Ok(offset) = u16::try_from(index) else {
            break;
        };
        let row = first_row + offset;
        if row >= area.bottom() {
            break;
        }

        let (symbol, color) = if dot.active {
            (ACTIVE, app.theme.dot_active)
        } else {
            (INACTIVE, app.theme.dot_inactive)
        };
        f.buffer_mut()
            .set_string(column, row, symbol, Style::default().fg(color));
        targets.push((Rect::new(area.x, row, area.width, 1), HitTarget::Dot(index)));
    }

    for (rect, target) in targets {
        app.hit_map.push(rect, target);
    }
}
