// UI rendering logic
//
// Called on every frame. Drawing also measures the viewport (the slide
// height is whatever the layout leaves for the slide stack) and rebuilds the
// click map, so input always hits what was last drawn.

use super::app::App;
use super::components::{self, dots, notification, slide};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Block,
    Frame,
};
use std::time::Instant;

/// Width of the dot indicator column
const DOT_COLUMN_WIDTH: u16 = 3;

/// Main UI render function
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    app.hit_map.clear();

    let bg_block = Block::default().style(app.theme.base());
    f.render_widget(bg_block, f.area());

    // Split the terminal into three vertical sections:
    // - Title bar (3 lines fixed)
    // - Slides (fills remaining space)
    // - Status bar (2 lines fixed)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(2),
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(DOT_COLUMN_WIDTH)])
        .split(chunks[1]);

    app.set_viewport_height(body[0].height);

    components::render_title(f, chunks[0], app);
    slide::render(f, body[0], app);
    dots::render(f, body[1], app);
    components::render_status(f, chunks[2], app);

    // Overlays last so they sit on top
    notification::render(f, f.area(), app, now);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::deck::Deck;
    use crate::engine::Location;
    use crate::engine::NavTrigger;
    use crate::logging::{LogBuffer, LogEntry, LogLevel};
    use crate::tui::app::HitTarget;
    use chrono::{Local, Utc};
    use ratatui::{backend::TestBackend, Terminal};

    fn app(now: Instant) -> App {
        let deck = Deck::builtin().unwrap();
        let location = Location::new(deck.name().to_string(), None);
        App::new(deck, location, None, &Config::default(), LogBuffer::new(), now)
    }

    #[test]
    fn draw_measures_viewport_and_registers_targets() {
        let now = Instant::now();
        let mut app = app(now);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app, now)).unwrap();

        // 30 rows - title (3) - status (2)
        assert_eq!(app.viewport().slide_height(), 25);
        // 9 dots + prev/copy/next of the first slide
        assert_eq!(app.hit_map.len(), 12);

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("[◀ Prev]"));
        assert!(text.contains("[Copy]"));
        assert!(text.contains("●"));
    }

    #[test]
    fn dot_targets_match_drawn_rows() {
        let now = Instant::now();
        let mut app = app(now);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app, now)).unwrap();

        // Body spans rows 3..28; 9 dots centered: first at 3 + (25 - 9) / 2
        assert_eq!(app.hit_map.hit(78, 11), Some(HitTarget::Dot(0)));
        assert_eq!(app.hit_map.hit(78, 19), Some(HitTarget::Dot(8)));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn title_shows_fragment_on_normal_width() {
        let now = Instant::now();
        let mut app = app(now);
        app.navigate(NavTrigger::Dot(2), now);
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app, now)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains(" #slide-3 ── "), "{text}");
        assert!(text.contains(" 3/9 "));
    }

    #[test]
    fn status_bar_shows_latest_warning_with_time_and_level() {
        let now = Instant::now();
        let mut app = app(now);
        let timestamp = Utc::now();
        app.log_buffer.add(LogEntry {
            timestamp,
            level: LogLevel::Warn,
            target: "snapdeck::copy::clipboard".to_string(),
            message: "Clipboard unavailable".to_string(),
        });
        let mut terminal = Terminal::new(TestBackend::new(130, 30)).unwrap();
        terminal.draw(|f| draw(f, &mut app, now)).unwrap();

        let expected = format!(
            "{} WARN snapdeck::copy::clipboard: Clipboard unavailable",
            timestamp.with_timezone(&Local).format("%H:%M:%S")
        );
        assert!(screen_text(&terminal).contains(&expected));
    }
}
