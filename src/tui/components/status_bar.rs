// Status bar component
//
// Renders key hints and the most recent warning from the log buffer
// (e.g. a failed clipboard write), stamped with its local time and level.
// Wide terminals also show the event's target module.

use crate::logging::LogLevel;
use chrono::Local;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar
///
/// Narrow terminals get the short key hints.
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let theme = &app.theme;

    let hints = if bp.at_least(Breakpoint::Normal) {
        " ↑↓ slide · Home/End · click dots · y copy · q quit"
    } else {
        " y copy · q quit"
    };
    let mut spans = vec![Span::styled(hints, Style::default().fg(theme.status_bar))];

    if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Warn) {
        let timestamp = entry.timestamp.with_timezone(&Local).format("%H:%M:%S");
        let source = if bp.at_least(Breakpoint::Wide) {
            format!(" {}:", entry.target)
        } else {
            String::new()
        };
        spans.push(Span::styled(
            format!(
                " │ {} {}{} {}",
                timestamp,
                entry.level.as_str(),
                source,
                entry.message
            ),
            Style::default().fg(theme.warning),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(theme.border)),
    );

    f.render_widget(status, area);
}
