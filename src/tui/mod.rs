// TUI module - Terminal User Interface
//
// This module hosts the presentation in the terminal using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard and mouse input, frame ticks)
// - Rendering the UI
// - Running clipboard writes off the loop and receiving their completions

pub mod app;
pub mod components;
pub mod layout;
pub mod markdown;
pub mod scroll;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::copy::{ClipboardWriter, CopyCompleted, CopyRequest};
use crate::deck::Deck;
use crate::engine::Location;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Frame interval; short enough for smooth scroll animation (~60 FPS)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Longest sleep between ticks while nothing is pending
const IDLE_INTERVAL: Duration = Duration::from_millis(250);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal when
/// done. Returns the final location (deck plus fragment) so it can be printed
/// after the alternate screen is gone.
pub async fn run_tui(
    deck: Deck,
    location: Location,
    startup_slide: Option<usize>,
    config: Config,
    log_buffer: LogBuffer,
) -> Result<String> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let writer = Arc::new(ClipboardWriter::system(config.clipboard.legacy_fallback));
    let mut app = App::new(
        deck,
        location,
        startup_slide,
        &config,
        log_buffer,
        Instant::now(),
    );

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, writer).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result.map(|()| app.href())
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Terminal input (keys, mouse wheel, clicks)
/// 2. The app's next wakeup (animations and timers), at most one per frame
/// 3. Completed clipboard writes
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    writer: Arc<ClipboardWriter>,
) -> Result<()> {
    let (copy_tx, mut copy_rx) = mpsc::channel::<CopyCompleted>(16);

    loop {
        let now = Instant::now();
        terminal
            .draw(|f| ui::draw(f, app, now))
            .context("Failed to draw terminal")?;

        let wake = app
            .next_wakeup(now)
            .map_or(now + IDLE_INTERVAL, |at| at.max(now + FRAME_INTERVAL));

        tokio::select! {
            // Keyboard or mouse input
            request = async {
                if !event::poll(Duration::from_millis(5)).unwrap_or(false) {
                    return None;
                }
                match event::read() {
                    Ok(Event::Key(key)) => app.handle_key(key, Instant::now()),
                    Ok(Event::Mouse(mouse)) => app.handle_mouse(mouse, Instant::now()),
                    Ok(_) => None,
                    Err(e) => {
                        tracing::warn!("Failed to read terminal event: {}", e);
                        None
                    }
                }
            } => {
                if let Some(request) = request {
                    spawn_copy(&writer, request, copy_tx.clone());
                }
            }

            // Animations, observer, timers
            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(wake)) => {
                app.tick(Instant::now());
            }

            Some(done) = copy_rx.recv() => {
                app.copy_completed(done, Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Write to the clipboard on a separate task and report back
fn spawn_copy(writer: &Arc<ClipboardWriter>, request: CopyRequest, tx: mpsc::Sender<CopyCompleted>) {
    let writer = Arc::clone(writer);
    tokio::spawn(async move {
        let path = writer.write(&request.text).await;
        let done = CopyCompleted {
            source_button: request.source_button,
            path,
        };
        if tx.send(done).await.is_err() {
            tracing::debug!("Event loop gone before copy completed");
        }
    });
}
