// Title bar component
//
// Renders the current slide's title with a right-aligned slide counter. Wide
// terminals also show the full location, normal ones just the fragment.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let current = app.current_slide();
    let slide_title = app
        .deck
        .get(current)
        .map(|s| s.title.as_str())
        .unwrap_or_default();

    let location = app.coordinator.location();
    let title_text = match Breakpoint::from_width(area.width) {
        Breakpoint::Wide => format!(" snapdeck ──── {} ── {}", location.href(), slide_title),
        Breakpoint::Normal => match location.fragment() {
            Some(fragment) => format!(" {} ── {}", fragment, slide_title),
            None => format!(" {}", slide_title),
        },
        Breakpoint::Compact => format!(" {}", slide_title),
    };
    let counter = format!(" {}/{} ", current + 1, app.deck.len());

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.title))
                .title_top(Line::from(counter).right_aligned()),
        );

    f.render_widget(title, area);
}
