// Slide stack component
//
// Slides are stacked vertically, each exactly one viewport tall. Every slide
// visible at the current scroll offset is rendered into its own off-screen
// buffer and the visible rows are copied into the frame, so partially
// scrolled slides clip cleanly at the viewport edges.
//
// Each slide carries its own button row: [◀ Prev] [Copy] [Next ▶]. The copy
// button is only present on slides with a copy block.

use crate::tui::app::{App, HitTarget};
use crate::tui::layout::text_width;
use crate::tui::markdown::render_markdown;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

const PREV_LABEL: &str = "◀ Prev";
const NEXT_LABEL: &str = "Next ▶";

/// Render every slide that intersects the viewport
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let height = i64::from(area.height);
    let local = Rect::new(0, 0, area.width, area.height);

    let mut targets = Vec::new();
    for index in 0..app.deck.len() {
        let top = app.viewport().screen_top(index);
        if top >= height || top + height <= 0 {
            continue;
        }

        let mut buffer = Buffer::empty(local);
        let buttons = draw_slide(&mut buffer, local, app, index);
        blit(f.buffer_mut(), area, &buffer, top);

        for (rect, target) in buttons {
            if let Some(rect) = to_screen(rect, area, top) {
                targets.push((rect, target));
            }
        }
    }

    for (rect, target) in targets {
        app.hit_map.push(rect, target);
    }
}

/// Draw one slide into `buf`; returns its buttons in slide-local coordinates
fn draw_slide(buf: &mut Buffer, area: Rect, app: &App, index: usize) -> Vec<(Rect, HitTarget)> {
    let Some(slide) = app.deck.get(index) else {
        return Vec::new();
    };
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" {} / {} ", index + 1, app.deck.len()))
        .style(theme.base());
    let inner = block.inner(area);
    block.render(area, buf);

    if inner.height < 2 || inner.width < 4 {
        return Vec::new();
    }

    let content = Rect::new(inner.x + 1, inner.y, inner.width - 2, inner.height - 1);
    let lines = render_markdown(&slide.body, usize::from(content.width), theme);
    Paragraph::new(lines).style(theme.base()).render(content, buf);

    // Button row on the slide's last inner line
    let row = inner.bottom() - 1;
    let controls = app.coordinator.controls();
    let prev_disabled = controls
        .prev_buttons()
        .get(index)
        .map(|b| b.disabled)
        .unwrap_or(true);
    let next_disabled = controls
        .next_buttons()
        .get(index)
        .map(|b| b.disabled)
        .unwrap_or(true);

    let mut buttons = Vec::new();

    let prev = format!("[{PREV_LABEL}]");
    let prev_rect = button(buf, inner.x + 1, row, &prev, theme.button_style(prev_disabled, false));
    buttons.push((prev_rect, HitTarget::Prev));

    let next = format!("[{NEXT_LABEL}]");
    let next_width = text_width(&next);
    let next_x = inner.right().saturating_sub(next_width.saturating_add(1));
    let next_rect = button(buf, next_x, row, &next, theme.button_style(next_disabled, false));
    buttons.push((next_rect, HitTarget::Next));

    if slide.copy_text.is_some() {
        let label = format!("[{}]", app.feedback.label(index, &app.labels.copy));
        let width = text_width(&label);
        let x = inner.x + inner.width.saturating_sub(width) / 2;
        let done = app.feedback.is_marked(index);
        let rect = button(buf, x, row, &label, theme.button_style(false, done));
        buttons.push((rect, HitTarget::Copy(index)));
    }

    buttons
}

fn button(buf: &mut Buffer, x: u16, y: u16, label: &str, style: Style) -> Rect {
    let (end_x, _) = buf.set_stringn(x, y, label, usize::MAX, style);
    Rect::new(x, y, end_x.saturating_sub(x), 1)
}

/// Copy the visible rows of a slide buffer into the frame
fn blit(dest: &mut Buffer, area: Rect, src: &Buffer, top: i64) {
    for y in 0..area.height {
        let Ok(src_y) = u16::try_from(i64::from(y) - top) else {
            continue;
        };
        if src_y >= src.area.height {
            continue;
        }
        for x in 0..area.width {
            if let (Some(cell), Some(target)) =
                (src.cell((x, src_y)), dest.cell_mut((area.x + x, area.y + y)))
            {
                *target = cell.clone();
            }
        }
    }
}

/// Map a slide-local rect to the screen, if its row is visible
fn to_screen(rect: Rect, area: Rect, top: i64) -> Option<Rect> {
    let row = i64::from(rect.y) + top;
    if row < 0 || row >= i64::from(area.height) {
        return None;
    }
    let row = u16::try_from(row).ok()?;
    Some(Rect::new(area.x + rect.x, area.y + row, rect.width, rect.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_screen_clips_rows_outside_viewport() {
        let area = Rect::new(2, 3, 40, 20);
        let button = Rect::new(1, 18, 8, 1);
        assert_eq!(to_screen(button, area, 0), Some(Rect::new(3, 21, 8, 1)));
        assert_eq!(to_screen(button, area, -10), Some(Rect::new(3, 11, 8, 1)));
        assert_eq!(to_screen(button, area, 5), None);
        assert_eq!(to_screen(button, area, -19), None);
    }

    #[test]
    fn blit_copies_only_visible_rows() {
        let local = Rect::new(0, 0, 4, 3);
        let mut src = Buffer::empty(local);
        src.set_string(0, 0, "aaaa", Style::default());
        src.set_string(0, 1, "bbbb", Style::default());
        src.set_string(0, 2, "cccc", Style::default());

        let area = Rect::new(0, 0, 4, 3);
        let mut dest = Buffer::empty(area);
        // Slide scrolled up by one row: row "bbbb" lands at the top
        blit(&mut dest, area, &src, -1);
        assert_eq!(dest.cell((0, 0)).map(|c| c.symbol()), Some("b"));
        assert_eq!(dest.cell((0, 1)).map(|c| c.symbol()), Some("c"));
        assert_eq!(dest.cell((0, 2)).map(|c| c.symbol()), Some(" "));
    }
}
