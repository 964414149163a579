//! Catppuccin Mocha color palette for the TUI.

use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds
    pub base: Color,
    pub surface: Color,

    // Foregrounds
    pub text: Color,
    pub subtext: Color,
    pub muted: Color,

    // Accents
    pub primary: Color,

    // Semantic
    pub warning: Color,
    pub error: Color,

    // Series colors
    pub power: Color,
    pub heart_rate: Color,

    // Selection overlay shading
    pub highlight: Color,

    // Borders
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl Theme {
    /// Catppuccin Mocha theme (default dark theme).
    pub fn mocha() -> Self {
        Self {
            // Backgrounds
            base: Color::Rgb(30, 30, 46),    // #1e1e2e
            surface: Color::Rgb(49, 50, 68), // #313244

            // Foregrounds
            text: Color::Rgb(205, 214, 244),    // #cdd6f4
            subtext: Color::Rgb(166, 173, 200), // #a6adc8
            muted: Color::Rgb(108, 112, 134),   // #6c7086

            // Accents
            primary: Color::Rgb(180, 190, 254), // #b4befe (lavender)

            // Semantic
            warning: Color::Rgb(249, 226, 175), // #f9e2af (yellow)
            error: Color::Rgb(243, 139, 168),   // #f38ba8 (red)

            // Series colors
            power: Color::Rgb(148, 226, 213),      // #94e2d5 (teal)
            heart_rate: Color::Rgb(243, 139, 168), // #f38ba8 (red)

            // Selection overlay shading, a dimmed yellow
            highlight: Color::Rgb(92, 83, 52),

            // Borders
            border: Color::Rgb(69, 71, 90), // #45475a
        }
    }
}
