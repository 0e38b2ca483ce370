//! Configuration for the presenter
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/snapdeck/config.toml)
//! 3. Built-in defaults (lowest priority)

use crate::engine::SettleMode;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;
mod presentation;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports (maintain public API)
// ─────────────────────────────────────────────────────────────────────────────

pub use observability::{FileLogging, LogRotation, LoggingConfig};
pub use presentation::{
    ClipboardConfig, FileClipboard, FileLabels, FileObserver, FileTiming, LabelsConfig,
    ObserverConfig, TimingConfig,
};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark" or "light"
    pub theme: String,

    /// How accepted transitions end: "animation" or "cooldown"
    pub settle: SettleMode,

    pub timing: TimingConfig,

    pub observer: ObserverConfig,

    pub labels: LabelsConfig,

    pub clipboard: ClipboardConfig,

    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            settle: SettleMode::default(),
            timing: TimingConfig::default(),
            observer: ObserverConfig::default(),
            labels: LabelsConfig::default(),
            clipboard: ClipboardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub settle: Option<String>,

    /// Optional [timing] section
    pub timing: Option<FileTiming>,

    /// Optional [observer] section
    pub observer: Option<FileObserver>,

    /// Optional [labels] section
    pub labels: Option<FileLabels>,

    /// Optional [clipboard] section
    pub clipboard: Option<FileClipboard>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/snapdeck/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("snapdeck").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be read or parsed is an error;
    /// silently falling back to defaults would hide the user's mistake.
    fn load_file_config() -> Result<FileConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(FileConfig::default());
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read config file {}", path.display()))
            }
        }
    }

    /// Load configuration: file -> env vars -> defaults
    pub fn from_env() -> Result<Self> {
        let file = Self::load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Merge file values and environment lookups over the defaults
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Theme: env > file > default
        let theme = env("SNAPDECK_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        // Settle mode: env > file > default
        let settle = env("SNAPDECK_SETTLE")
            .or(file.settle)
            .map(|s| SettleMode::from_str(&s))
            .unwrap_or(defaults.settle);

        // Log level: env > file > default (RUST_LOG still wins at filter time)
        let mut logging = LoggingConfig::from_file(file.logging);
        if let Some(level) = env("SNAPDECK_LOG_LEVEL") {
            logging.level = level;
        }

        Self {
            theme,
            settle,
            timing: TimingConfig::from_file(file.timing),
            observer: ObserverConfig::from_file(file.observer),
            labels: LabelsConfig::from_file(file.labels),
            clipboard: ClipboardConfig::from_file(file.clipboard),
            logging,
        }
    }
}
