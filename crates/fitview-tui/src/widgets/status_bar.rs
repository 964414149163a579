//! Status bar widget.
//!
//! Format: `ride.fit │ 5231 records │ 01:27:14 │ sel 00:10:00 – 00:12:30 │ message`

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fitview_core::format_elapsed;

use crate::app::App;
use crate::theme::Theme;

/// Status bar widget.
pub struct StatusBar<'a> {
    app: &'a App,
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    /// Create a new status bar widget.
    pub fn new(app: &'a App, theme: &'a Theme) -> Self {
        Self { app, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let file = self
            .app
            .file
            .file_name()
            .map_or_else(|| self.app.file.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            });

        let mut spans = vec![Span::styled(file, Style::default().fg(self.theme.text))];

        if let Some(summary) = self.app.summary() {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                format!("{} records", summary.records),
                Style::default().fg(self.theme.subtext),
            ));
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                format_elapsed(summary.duration_secs),
                Style::default().fg(self.theme.subtext),
            ));
        }

        if let Some((lo, hi)) = self.app.selection_labels() {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                format!("sel {lo} \u{2013} {hi}"),
                Style::default().fg(self.theme.warning),
            ));
        }

        if self.app.loading {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(
                "loading\u{2026}",
                Style::default().fg(self.theme.primary),
            ));
        } else if let Some(ref status) = self.app.status {
            spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            spans.push(Span::styled(status, Style::default().fg(self.theme.error)));
        }

        let line = Line::from(spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}
