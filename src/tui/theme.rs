// Theme system for the TUI
//
// Each theme defines colors for every element the presenter draws.

use ratatui::style::{Color, Modifier, Style};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse theme name from config; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub muted: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,
    pub warning: Color,

    // Slide content
    pub heading: Color,
    pub code_fg: Color,
    pub code_bg: Color,

    // Controls
    pub button: Color,
    pub button_disabled: Color,
    pub button_done: Color,
    pub dot_active: Color,
    pub dot_inactive: Color,

    // Notifications
    pub notification_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            bg: Color::Reset,
            fg: Color::White,
            border: Color::Gray,
            muted: Color::DarkGray,

            title: Color::Cyan,
            status_bar: Color::Green,
            warning: Color::Yellow,

            heading: Color::Cyan,
            code_fg: Color::LightYellow,
            code_bg: Color::Rgb(30, 30, 30),

            button: Color::Cyan,
            button_disabled: Color::DarkGray,
            button_done: Color::Green,
            dot_active: Color::Cyan,
            dot_inactive: Color::DarkGray,

            notification_border: Color::Green,
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            border: Color::DarkGray,
            muted: Color::Gray,

            title: Color::Blue,
            status_bar: Color::DarkGray,
            warning: Color::Rgb(184, 134, 11), // Dark goldenrod

            heading: Color::Blue,
            code_fg: Color::Rgb(90, 40, 120),
            code_bg: Color::Rgb(235, 235, 235),

            button: Color::Blue,
            button_disabled: Color::Gray,
            button_done: Color::Green,
            dot_active: Color::Blue,
            dot_inactive: Color::Gray,

            notification_border: Color::Green,
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.heading)
            .add_modifier(Modifier::BOLD)
    }

    pub fn code_style(&self) -> Style {
        Style::default().fg(self.code_fg).bg(self.code_bg)
    }

    /// Style for a button in the given state
    pub fn button_style(&self, disabled: bool, done: bool) -> Style {
        if disabled {
            Style::default()
                .fg(self.button_disabled)
                .add_modifier(Modifier::DIM)
        } else if done {
            Style::default()
                .fg(self.button_done)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.button)
        }
    }
}
