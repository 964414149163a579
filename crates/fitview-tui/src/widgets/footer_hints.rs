//! Footer key-hint widget.
//!
//! Minimal format: `[p] power │ [h] heart rate │ [r] reset zoom │ [?] help`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "r", "←/→").
    pub key: String,
    /// The action description (e.g., "reset zoom").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Footer hints widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self { hints, theme }
    }

    /// Default hints for the viewer.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("p", "power"),
            KeyHint::new("h", "heart rate"),
            KeyHint::new("drag", "select"),
            KeyHint::new("+/-", "zoom"),
            KeyHint::new("\u{2190}/\u{2192}", "pan"),
            KeyHint::new("r", "reset zoom"),
            KeyHint::new("o", "reload"),
            KeyHint::new("?", "help"),
            KeyHint::new("q", "quit"),
        ]
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = Vec::new();
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }
            spans.push(Span::styled(
                format!("[{}]", hint.key),
                Style::default().fg(self.theme.primary),
            ));
            spans.push(Span::styled(
                format!(" {}", hint.action),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let paragraph =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(self.theme.base));
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_hints_cover_controls() {
        let hints = FooterHints::default_hints();
        let keys: Vec<&str> = hints.iter().map(|h| h.key.as_str()).collect();
        assert!(keys.contains(&"p"));
        assert!(keys.contains(&"h"));
        assert!(keys.contains(&"r"));
        assert!(keys.contains(&"q"));
    }
}
