//! Presentation behavior: timing, observer threshold, labels, clipboard
//!
//! All delays are stored in milliseconds (the unit users write in the
//! config file) and exposed as `Duration` accessors.

use crate::copy::NotificationTiming;
use serde::Deserialize;
use std::time::Duration;

// ─────────────────────────────────────────────────────────────────────────────
// Timing
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Transition lock after an accepted request (backstop in animation mode)
    pub transition_cooldown_ms: u64,
    /// Delay before navigating to the startup fragment
    pub startup_delay_ms: u64,
    /// Smooth scroll duration
    pub scroll_animation_ms: u64,
    /// Wheel idle time before snapping to the nearest slide
    pub snap_idle_ms: u64,
    /// Rows moved per wheel notch
    pub wheel_step_rows: u16,
    /// How long a copy button shows its done label
    pub copy_feedback_ms: u64,
    pub notification_enter_ms: u64,
    pub notification_hide_ms: u64,
    pub notification_exit_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            transition_cooldown_ms: 1000,
            startup_delay_ms: 100,
            scroll_animation_ms: 600,
            snap_idle_ms: 150,
            wheel_step_rows: 3,
            copy_feedback_ms: 2000,
            notification_enter_ms: 100,
            notification_hide_ms: 2000,
            notification_exit_ms: 300,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileTiming {
    pub transition_cooldown_ms: Option<u64>,
    pub startup_delay_ms: Option<u64>,
    pub scroll_animation_ms: Option<u64>,
    pub snap_idle_ms: Option<u64>,
    pub wheel_step_rows: Option<u16>,
    pub copy_feedback_ms: Option<u64>,
    pub notification_enter_ms: Option<u64>,
    pub notification_hide_ms: Option<u64>,
    pub notification_exit_ms: Option<u64>,
}

impl TimingConfig {
    pub fn from_file(file: Option<FileTiming>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();

        Self {
            transition_cooldown_ms: file
                .transition_cooldown_ms
                .unwrap_or(d.transition_cooldown_ms),
            startup_delay_ms: file.startup_delay_ms.unwrap_or(d.startup_delay_ms),
            scroll_animation_ms: file.scroll_animation_ms.unwrap_or(d.scroll_animation_ms),
            snap_idle_ms: file.snap_idle_ms.unwrap_or(d.snap_idle_ms),
            wheel_step_rows: file.wheel_step_rows.unwrap_or(d.wheel_step_rows).max(1),
            copy_feedback_ms: file.copy_feedback_ms.unwrap_or(d.copy_feedback_ms),
            notification_enter_ms: file
                .notification_enter_ms
                .unwrap_or(d.notification_enter_ms),
            notification_hide_ms: file.notification_hide_ms.unwrap_or(d.notification_hide_ms),
            notification_exit_ms: file.notification_exit_ms.unwrap_or(d.notification_exit_ms),
        }
    }

    pub fn transition_cooldown(&self) -> Duration {
        Duration::from_millis(self.transition_cooldown_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    pub fn scroll_animation(&self) -> Duration {
        Duration::from_millis(self.scroll_animation_ms)
    }

    pub fn snap_idle(&self) -> Duration {
        Duration::from_millis(self.snap_idle_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_millis(self.copy_feedback_ms)
    }

    pub fn notification(&self) -> NotificationTiming {
        NotificationTiming {
            enter: Duration::from_millis(self.notification_enter_ms),
            hide: Duration::from_millis(self.notification_hide_ms),
            exit: Duration::from_millis(self.notification_exit_ms),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Scroll observer
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ObserverConfig {
    /// Visible ratio a slide must exceed to become current (0.0 - 1.0)
    pub threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileObserver {
    pub threshold: Option<f64>,
}

impl ObserverConfig {
    pub fn from_file(file: Option<FileObserver>) -> Self {
        let threshold = file
            .and_then(|f| f.threshold)
            .filter(|t| (0.0..1.0).contains(t))
            .unwrap_or(Self::default().threshold);
        Self { threshold }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Labels
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct LabelsConfig {
    /// Copy button label
    pub copy: String,
    /// Copy button label after a successful copy
    pub copied: String,
    /// Notification shown after every copy
    pub notification: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            copy: "Copy".to_string(),
            copied: "Copied!".to_string(),
            notification: "Copied to clipboard!".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLabels {
    pub copy: Option<String>,
    pub copied: Option<String>,
    pub notification: Option<String>,
}

impl LabelsConfig {
    pub fn from_file(file: Option<FileLabels>) -> Self {
        let file = file.unwrap_or_default();
        let d = Self::default();
        Self {
            copy: file.copy.unwrap_or(d.copy),
            copied: file.copied.unwrap_or(d.copied),
            notification: file.notification.unwrap_or(d.notification),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardConfig {
    /// Fall back to the terminal's OSC 52 sequence when the system clipboard fails
    pub legacy_fallback: bool,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            legacy_fallback: true,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileClipboard {
    pub legacy_fallback: Option<bool>,
}

impl ClipboardConfig {
    pub fn from_file(file: Option<FileClipboard>) -> Self {
        Self {
            legacy_fallback: file
                .and_then(|f| f.legacy_fallback)
                .unwrap_or(Self::default().legacy_fallback),
        }
    }
}
