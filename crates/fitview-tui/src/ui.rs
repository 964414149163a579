//! Screen layout and drawing for the viewer.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::app::App;
use crate::chart::ChartWidget;
use crate::theme::Theme;
use crate::widgets::{FooterHints, StatusBar};

/// Draw one frame.
///
/// Records the chart rect on the app so pointer events can be resolved
/// against the geometry that was actually drawn.
pub fn draw(app: &mut App, theme: &Theme, frame: &mut Frame<'_>) {
    let [chart_rect, status_rect, footer_rect] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    app.chart_area = Some(chart_rect);

    let chart = ChartWidget::new(&app.display, &app.viewport, theme)
        .highlight(app.selector.highlight());
    frame.render_widget(chart, chart_rect);

    frame.render_widget(StatusBar::new(app, theme), status_rect);

    let hints = FooterHints::default_hints();
    frame.render_widget(FooterHints::new(&hints, theme), footer_rect);

    if app.show_help {
        render_help_overlay(theme, frame.area(), frame.buffer_mut());
    }
}

/// Render the help overlay, centered.
pub fn render_help_overlay(theme: &Theme, area: Rect, buf: &mut Buffer) {
    let help_text = r"
  Series
    p                 Toggle power
    h                 Toggle heart rate

  Chart
    drag              Select a region
    + / -             Zoom in/out (mouse wheel works too)
    Left / Right      Pan
    r                 Reset zoom (clears the selection)
    Esc               Clear the selection

  File
    o                 Reload the file
    q                 Quit
    ?                 Toggle this help
";

    let width = 56.min(area.width.saturating_sub(4));
    let height = 18.min(area.height.saturating_sub(4));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(theme.text))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.base));

    Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(theme.text).bg(theme.base))
        .render(overlay_area, buf);
}

/// Center a fixed-size rect inside `area`.
fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_fixed(40, 10, area);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));

        // Never larger than the surrounding area
        let small = centered_fixed(100, 100, area);
        assert_eq!(small.width, 80);
        assert_eq!(small.height, 24);
    }
}
