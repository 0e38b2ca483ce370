// CLI module - command-line argument parsing and handlers
//
// Running without a subcommand presents a deck. Subcommands:
// - outline: list every slide with its fragment
// - config --show: Display effective configuration
// - config --path: Show config file path
// - config --reset: Regenerate config file with defaults

use crate::config::{Config, VERSION};
use crate::deck::Deck;
use crate::engine::fragment::{format_fragment, split_location};
use crate::engine::{FragmentParser, Location};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::Path;

/// snapdeck - scroll-snapped slide presenter for the terminal
#[derive(Parser)]
#[command(name = "snapdeck")]
#[command(version = VERSION)]
#[command(about = "Scroll-snapped slide presenter for the terminal", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Markdown deck, optionally with a fragment (talk.md#slide-3)
    pub deck: Option<String>,

    /// Start on this slide (1-based, overrides the fragment)
    #[arg(long, value_name = "N")]
    pub slide: Option<usize>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every slide with its fragment and title
    Outline {
        /// Markdown deck (defaults to the built-in deck)
        deck: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// Everything needed to start presenting
pub struct Launch {
    pub deck: Deck,
    pub location: Location,
    /// Slide named by the startup fragment, if valid
    pub startup_slide: Option<usize>,
}

/// Load the deck named on the command line and resolve the startup fragment
///
/// An empty path (e.g. just `#slide-4`) selects the built-in deck. An invalid
/// or out-of-range fragment is kept in the location but ignored for
/// navigation.
pub fn resolve_launch(
    deck_arg: Option<&str>,
    slide: Option<usize>,
    parser: &FragmentParser,
) -> Result<Launch> {
    let (path, arg_fragment) = match deck_arg {
        Some(arg) => split_location(arg),
        None => ("", None),
    };

    let (deck, href_base) = load_deck(path)?;

    let fragment = match slide {
        Some(0) => bail!("--slide is 1-based"),
        Some(n) => Some(format_fragment(n - 1)),
        None => arg_fragment.map(str::to_string),
    };

    let startup_slide = fragment
        .as_deref()
        .and_then(|f| parser.parse(f, deck.len()));
    if let (Some(fragment), None) = (&fragment, startup_slide) {
        tracing::warn!(%fragment, slides = deck.len(), "Ignoring startup fragment");
    }

    Ok(Launch {
        location: Location::new(href_base, fragment),
        startup_slide,
        deck,
    })
}

fn load_deck(path: &str) -> Result<(Deck, String)> {
    if path.is_empty() {
        let deck = Deck::builtin()?;
        let name = deck.name().to_string();
        return Ok((deck, name));
    }
    Ok((Deck::load(Path::new(path))?, path.to_string()))
}

/// Handle a subcommand
pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Outline { deck } => handle_outline(deck.as_deref()),
        Commands::Config { show, path, reset } => {
            if path {
                handle_config_path()
            } else if show {
                handle_config_show()
            } else if reset {
                handle_config_reset()
            } else {
                // No flag provided, show help
                println!("Usage: snapdeck config [--show|--path|--reset]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --path    Show config file path");
                println!("  --reset   Reset config file to defaults");
                Ok(())
            }
        }
    }
}

/// One outline row per slide: fragment, title and a copy marker
pub fn outline(deck: &Deck) -> Vec<String> {
    deck.slides()
        .iter()
        .map(|slide| {
            let marker = if slide.copy_text.is_some() { " [copy]" } else { "" };
            format!("{:<10} {}{}", format_fragment(slide.index), slide.title, marker)
        })
        .collect()
}

fn handle_outline(deck_arg: Option<&str>) -> Result<()> {
    let path = deck_arg.map(|arg| split_location(arg).0).unwrap_or("");
    let (deck, href_base) = load_deck(path)?;
    println!("# {} ({} slides)", href_base, deck.len());
    for line in outline(&deck) {
        println!("{line}");
    }
    Ok(())
}

fn handle_config_path() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config_show() -> Result<()> {
    let config = Config::from_env()?;

    println!("# Effective configuration (env > file > defaults)");
    println!();
    print!("{}", config.to_toml());

    // Show source info
    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    // Write the default config (using Config's single source of truth)
    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parser() -> FragmentParser {
        FragmentParser::new().unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_deck_and_subcommands() {
        let cli = Cli::try_parse_from(["snapdeck", "talk.md#slide-3", "--slide", "2"]).unwrap();
        assert_eq!(cli.deck.as_deref(), Some("talk.md#slide-3"));
        assert_eq!(cli.slide, Some(2));
        assert!(cli.command.is_none());

        let cli = Cli::try_parse_from(["snapdeck", "outline", "talk.md"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Outline { deck: Some(ref d) }) if d == "talk.md"
        ));
    }

    #[test]
    fn builtin_deck_with_fragment_only() {
        let launch = resolve_launch(Some("#slide-4"), None, &parser()).unwrap();
        assert_eq!(launch.startup_slide, Some(3));
        assert_eq!(launch.location.href(), "prompts.md#slide-4");
    }

    #[test]
    fn slide_flag_overrides_fragment() {
        let launch = resolve_launch(Some("#slide-4"), Some(9), &parser()).unwrap();
        assert_eq!(launch.startup_slide, Some(8));
        assert_eq!(launch.location.fragment(), Some("#slide-9"));
        assert!(resolve_launch(None, Some(0), &parser()).is_err());
    }

    #[test]
    fn invalid_fragment_is_kept_but_ignored() {
        let launch = resolve_launch(Some("#slide-99"), None, &parser()).unwrap();
        assert_eq!(launch.startup_slide, None);
        assert_eq!(launch.location.fragment(), Some("#slide-99"));

        let launch = resolve_launch(None, None, &parser()).unwrap();
        assert_eq!(launch.startup_slide, None);
        assert_eq!(launch.location.href(), "prompts.md");
    }

    #[test]
    fn missing_deck_file_is_an_error() {
        assert!(resolve_launch(Some("/nonexistent/deck.md"), None, &parser()).is_err());
    }

    #[test]
    fn outline_lists_every_slide() {
        let deck = Deck::parse(
            "talk.md".to_string(),
            "# Intro\n\n---\n\n# Prompt\n\n```\ncopy me\n```\n",
        )
        .unwrap();
        assert_eq!(
            outline(&deck),
            vec!["#slide-1   Intro".to_string(), "#slide-2   Prompt [copy]".to_string()]
        );
    }
}
