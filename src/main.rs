// snapdeck - scroll-snapped slide presenter for the terminal
//
// Presents a Markdown deck as full-height slides in a scrollable viewport
// and keeps one "current slide" in sync across scroll position, navigation
// controls, keyboard input and a bookmarkable `#slide-<N>` location.
//
// Architecture:
// - Engine: slide state coordinator, scroll observer, input adapter
// - Copy chain: clipboard writer (arboard, OSC 52 fallback), button
//   feedback, notifications
// - TUI (ratatui): viewport, controls and the event loop
// - Deck: Markdown loading and slide splitting

mod cli;
mod config;
mod copy;
mod deck;
mod engine;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::Config;
use engine::FragmentParser;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands first (outline, config --show/--path/--reset)
    if let Some(command) = cli.command {
        return cli::run_command(command);
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();
    let config = Config::from_env()?;

    // Logs are captured to the buffer (never the terminal) and optionally
    // mirrored to rotating files. The guard keeps the file writer alive.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, &log_buffer);

    let parser = FragmentParser::new()?;
    let launch = cli::resolve_launch(cli.deck.as_deref(), cli.slide, &parser)?;

    tracing::info!(
        deck = %launch.location.deck(),
        slides = launch.deck.len(),
        settle = config.settle.as_str(),
        "Starting presentation"
    );

    let href = tui::run_tui(
        launch.deck,
        launch.location,
        launch.startup_slide,
        config,
        log_buffer,
    )
    .await?;

    // Final location, so the slide can be bookmarked or reopened
    println!("{href}");
    Ok(())
}
