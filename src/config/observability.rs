//! Log settings for the presenter
//!
//! The terminal belongs to the slides while presenting, so everything below
//! only shapes the optional JSON file mirror and the capture filter.

use serde::Deserialize;
use std::path::PathBuf;

/// How often the log file mirror starts a new file
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    Never,
}

impl LogRotation {
    const NAMES: [(&'static str, LogRotation); 3] = [
        ("hourly", LogRotation::Hourly),
        ("daily", LogRotation::Daily),
        ("never", LogRotation::Never),
    ];

    /// Unrecognized names fall back to daily rotation
    pub fn from_str(s: &str) -> Self {
        let s = s.trim();
        Self::NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, rotation)| *rotation)
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, rotation)| rotation == self)
            .map(|(name, _)| *name)
            .unwrap_or("daily")
    }
}

/// Effective `[logging]` settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive for captured events (`RUST_LOG` overrides it)
    pub level: String,
    /// Mirror captured events to rotating JSON files
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; rotation appends the date (`snapdeck.2024-01-15`)
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "snapdeck".to_string(),
        }
    }
}

/// `[logging]` table as written in the config file
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            level: file.level.unwrap_or(d.level),
            file_enabled: file.file_enabled.unwrap_or(d.file_enabled),
            file_dir: file.file_dir.map_or(d.file_dir, PathBuf::from),
            file_rotation: file
                .file_rotation
                .map_or(d.file_rotation, |s| LogRotation::from_str(&s)),
            file_prefix: file.file_prefix.unwrap_or(d.file_prefix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_names() {
        assert_eq!(LogRotation::from_str("Hourly"), LogRotation::Hourly);
        assert_eq!(LogRotation::from_str(" never "), LogRotation::Never);
        assert_eq!(LogRotation::from_str("weekly"), LogRotation::Daily);
        assert_eq!(LogRotation::Never.as_str(), "never");
    }

    #[test]
    fn missing_table_uses_defaults() {
        let config = LoggingConfig::from_file(None);
        assert_eq!(config.level, "info");
        assert!(!config.file_enabled);
        assert_eq!(config.file_prefix, "snapdeck");
    }
}
