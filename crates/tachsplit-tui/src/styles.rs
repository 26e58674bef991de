//! TUI styles and color theme.

use ratatui::style::{Color, Modifier, Style};

/// Color theme for the TUI.
pub struct ColorTheme {
    pub primary: Color,
    pub success: Color,
    pub error: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            error: Color::Red,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Style for headings and emphasized values.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for muted text (placeholders, unit suffixes).
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for the copy confirmation.
    #[must_use]
    pub fn success_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for the copy failure note.
    #[must_use]
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }
}
