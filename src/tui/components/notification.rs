//! Notification overlay
//!
//! Renders active notifications stacked upward from the bottom-right corner,
//! newest at the bottom. Entering notifications are not drawn yet; leaving
//! ones are dimmed while their exit runs.

use crate::copy::NotificationPhase;
use crate::tui::app::App;
use crate::tui::layout::text_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// 1 line of text + 2 for borders
const HEIGHT: u16 = 3;

pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    if app.notifications.is_empty() {
        return;
    }
    let visible: Vec<_> = app
        .notifications
        .active(now)
        .filter(|(_, phase)| *phase != NotificationPhase::Entering)
        .collect();

    for (slot, (notification, phase)) in visible.iter().rev().enumerate() {
        let Ok(slot) = u16::try_from(slot) else {
            break;
        };
        // Add 4 for padding (2 chars each side) and border
        let width = text_width(&notification.message)
            .saturating_add(4)
            .min(area.width.saturating_sub(4));
        let x = area.right().saturating_sub(width.saturating_add(2));
        let Some(y) = area
            .bottom()
            .checked_sub(HEIGHT + 2 + slot * HEIGHT)
            .filter(|y| *y >= area.y)
        else {
            break;
        };
        let toast_area = Rect::new(x, y, width, HEIGHT);

        let mut style = Style::default().fg(app.theme.fg).bg(app.theme.bg);
        if *phase == NotificationPhase::Leaving {
            style = style.add_modifier(Modifier::DIM);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.notification_border))
            .style(style);

        let text = Paragraph::new(notification.message.as_str())
            .alignment(Alignment::Center)
            .style(style)
            .block(block);

        // Clear the area first so the notification appears on top
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
