//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Render the config as a commented TOML file
    pub fn to_toml(&self) -> String {
        let t = &self.timing;
        let l = &self.labels;
        let log = &self.logging;

        format!(
            r#"# snapdeck configuration
# Environment overrides: SNAPDECK_THEME, SNAPDECK_SETTLE, SNAPDECK_LOG_LEVEL

# Color theme: "dark" or "light"
theme = {theme:?}

# How a navigation transition ends:
#   "animation" - when the scroll animation completes (cooldown is a backstop)
#   "cooldown"  - only after transition_cooldown_ms
settle = {settle:?}

[timing]
transition_cooldown_ms = {cooldown}
startup_delay_ms = {startup}
scroll_animation_ms = {scroll}
snap_idle_ms = {snap}
wheel_step_rows = {wheel}
copy_feedback_ms = {feedback}
notification_enter_ms = {enter}
notification_hide_ms = {hide}
notification_exit_ms = {exit}

[observer]
# Visible ratio a slide must exceed to become current
threshold = {threshold:?}

[labels]
copy = {copy:?}
copied = {copied:?}
notification = {notification:?}

[clipboard]
# Use the terminal's OSC 52 sequence when the system clipboard fails
legacy_fallback = {legacy}

[logging]
level = {level:?}
file_enabled = {file_enabled}
file_dir = {file_dir:?}
file_rotation = {rotation:?}
file_prefix = {prefix:?}
"#,
            theme = self.theme,
            settle = self.settle.as_str(),
            cooldown = t.transition_cooldown_ms,
            startup = t.startup_delay_ms,
            scroll = t.scroll_animation_ms,
            snap = t.snap_idle_ms,
            wheel = t.wheel_step_rows,
            feedback = t.copy_feedback_ms,
            enter = t.notification_enter_ms,
            hide = t.notification_hide_ms,
            exit = t.notification_exit_ms,
            threshold = self.observer.threshold,
            copy = l.copy,
            copied = l.copied,
            notification = l.notification,
            legacy = self.clipboard.legacy_fallback,
            level = log.level,
            file_enabled = log.file_enabled,
            file_dir = log.file_dir.display().to_string(),
            rotation = log.file_rotation.as_str(),
            prefix = log.file_prefix,
        )
    }
}
