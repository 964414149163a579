//! Chart widget: bar/line rendering of the display series.
//!
//! Drawing is delegated to ratatui's `Chart`; this widget assembles its
//! datasets from the projected series, samples axis labels from the visible
//! window, and shades the selection overlay on top.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, Borders, Chart, Dataset as ChartDataset, GraphType, Paragraph, Widget,
    },
};

use fitview_core::{DisplaySeries, Highlight, SeriesKind, HEART_RATE_SERIES, POWER_SERIES};

use super::viewport::Viewport;
use crate::theme::Theme;

/// Columns reserved on the left for y-axis labels plus the axis line.
const LEFT_GUTTER: u16 = 6;

/// Rows reserved at the bottom for the axis line plus x-axis labels.
const BOTTOM_GUTTER: u16 = 2;

/// Upper bound on sampled x-axis tick labels.
const MAX_X_LABELS: usize = 5;

/// Chart pane widget.
pub struct ChartWidget<'a> {
    series: &'a DisplaySeries,
    viewport: &'a Viewport,
    theme: &'a Theme,
    highlight: Highlight,
}

impl<'a> ChartWidget<'a> {
    /// Create a new chart widget.
    pub fn new(series: &'a DisplaySeries, viewport: &'a Viewport, theme: &'a Theme) -> Self {
        Self {
            series,
            viewport,
            theme,
            highlight: Highlight::default(),
        }
    }

    /// Set the selection overlay to shade.
    #[must_use]
    pub fn highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Drawable plot cells inside `area`: the block interior minus the axis
    /// gutters. Pointer hit-testing uses the same geometry, so this must
    /// stay in sync with the label widths handed to the chart.
    pub fn plot_area(area: Rect) -> Rect {
        Rect {
            x: area.x.saturating_add(1 + LEFT_GUTTER),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(2 + LEFT_GUTTER),
            height: area.height.saturating_sub(2 + BOTTOM_GUTTER),
        }
    }

    /// Visible `start..end` slice of the labels, clamped to the data so a
    /// render against a momentarily stale viewport cannot panic.
    fn visible_window(&self) -> (usize, usize) {
        let total = self.series.labels.len();
        let start = self.viewport.offset().min(total.saturating_sub(1));
        let end = (start + self.viewport.visible()).clamp(start + 1, total);
        (start, end)
    }

    /// Column span of the highlight within the visible window, endpoints
    /// ordered (the selector reports raw drag order).
    fn highlight_columns(&self, area: Rect, start: usize, end: usize) -> Option<(u16, u16)> {
        let plot = Self::plot_area(area);
        if plot.width == 0 || plot.height == 0 {
            return None;
        }

        let (lo, hi) = match (self.highlight.x_min, self.highlight.x_max) {
            (Some(a), Some(b)) => (a.min(b), a.max(b)),
            // Drag in progress: shade the anchor column
            (Some(a), None) | (None, Some(a)) => (a, a),
            (None, None) => return None,
        };
        if hi < start || lo >= end {
            return None;
        }
        let lo = lo.max(start);
        let hi = hi.min(end - 1);

        let x_lo = self.viewport.index_to_x(lo, plot.x, plot.width)?;
        let x_hi = self.viewport.index_to_x(hi, plot.x, plot.width)?;
        Some((x_lo, x_hi))
    }

    fn series_color(&self, name: &str) -> ratatui::style::Color {
        match name {
            POWER_SERIES => self.theme.power,
            HEART_RATE_SERIES => self.theme.heart_rate,
            _ => self.theme.primary,
        }
    }

    fn render_empty(&self, block: Block<'_>, area: Rect, buf: &mut Buffer) {
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width < 4 {
            return;
        }
        let message = Line::from(Span::styled(
            "No ride loaded",
            Style::default().fg(self.theme.muted),
        ));
        Paragraph::new(message).render(
            Rect::new(inner.x + 2, inner.y + inner.height / 2, inner.width - 4, 1),
            buf,
        );
    }
}

impl Widget for ChartWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Ride ")
            .title_style(Style::default().fg(self.theme.text))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .style(Style::default().bg(self.theme.base));

        if self.series.labels.is_empty() {
            self.render_empty(block, area, buf);
            return;
        }

        let (start, end) = self.visible_window();
        let window = &self.series.labels[start..end];

        // One point per visible record, x = label index
        let point_sets: Vec<Vec<(f64, f64)>> = self
            .series
            .datasets
            .iter()
            .map(|dataset| {
                (start..end.min(dataset.values.len()))
                    .map(|i| (i as f64, dataset.values[i]))
                    .collect()
            })
            .collect();

        let datasets: Vec<ChartDataset<'_>> = self
            .series
            .datasets
            .iter()
            .zip(&point_sets)
            .map(|(dataset, points)| {
                let (marker, graph_type) = match dataset.kind {
                    SeriesKind::Bar => (symbols::Marker::HalfBlock, GraphType::Bar),
                    SeriesKind::Line => (symbols::Marker::Braille, GraphType::Line),
                };
                ChartDataset::default()
                    .name(dataset.name)
                    .marker(marker)
                    .graph_type(graph_type)
                    .style(Style::default().fg(self.series_color(dataset.name)))
                    .data(points)
            })
            .collect();

        let x_min = start as f64;
        let x_max = ((end - 1) as f64).max(x_min + 1.0);

        let peak = point_sets
            .iter()
            .flatten()
            .map(|&(_, v)| v)
            .fold(0.0_f64, f64::max);
        let y_max = if peak <= 0.0 { 1.0 } else { peak * 1.1 };

        let label_count = MAX_X_LABELS.min(window.len());
        let x_labels: Vec<String> = if label_count <= 1 {
            vec![window[0].clone()]
        } else {
            (0..label_count)
                .map(|i| window[i * (window.len() - 1) / (label_count - 1)].clone())
                .collect()
        };
        let y_labels: Vec<String> = [0.0, y_max / 2.0, y_max]
            .iter()
            .map(|v| format!("{v:>5.0}"))
            .collect();

        let x_axis = Axis::default()
            .title("Elapsed Time (HH:MM:SS)")
            .style(Style::default().fg(self.theme.muted))
            .bounds([x_min, x_max])
            .labels(x_labels);
        let y_axis = Axis::default()
            .style(Style::default().fg(self.theme.muted))
            .bounds([0.0, y_max])
            .labels(y_labels);

        Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis)
            .render(area, buf);

        // Selection overlay on top of the plot
        if let Some((x_lo, x_hi)) = self.highlight_columns(area, start, end) {
            let plot = Self::plot_area(area);
            for x in x_lo..=x_hi {
                for y in plot.y..plot.y + plot.height {
                    if let Some(cell) = buf.cell_mut((x, y)) {
                        cell.set_bg(self.theme.highlight);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitview_core::{project, Record, SeriesSelection};
    use ratatui::{backend::TestBackend, Terminal};

    fn sample_series(count: i64) -> DisplaySeries {
        use chrono::TimeZone;
        let records: Vec<Record> = (0..count)
            .map(|i| {
                Record::new(
                    chrono::Utc.timestamp_opt(1_700_000_000 + i, 0).unwrap(),
                    Some(100.0 + i as f64),
                    Some(80.0 + i as f64),
                )
            })
            .collect();
        project(&records, SeriesSelection::default())
    }

    fn render_to_string(series: &DisplaySeries, viewport: &Viewport, highlight: Highlight) -> String {
        let theme = Theme::default();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let widget = ChartWidget::new(series, viewport, &theme).highlight(highlight);
                frame.render_widget(widget, frame.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_renders_legend_and_axis_title() {
        let series = sample_series(60);
        let viewport = Viewport::new(60);
        let screen = render_to_string(&series, &viewport, Highlight::default());

        assert!(screen.contains("Ride"));
        assert!(screen.contains("Power"));
        assert!(screen.contains("Heart Rate"));
        assert!(screen.contains("Elapsed Time (HH:MM:SS)"));
        assert!(screen.contains("00:00:00"));
    }

    #[test]
    fn test_empty_series_shows_placeholder() {
        let series = DisplaySeries::default();
        let viewport = Viewport::new(0);
        let screen = render_to_string(&series, &viewport, Highlight::default());
        assert!(screen.contains("No ride loaded"));
    }

    #[test]
    fn test_highlight_does_not_disturb_layout() {
        let series = sample_series(60);
        let viewport = Viewport::new(60);
        let plain = render_to_string(&series, &viewport, Highlight::default());
        let highlighted = render_to_string(
            &series,
            &viewport,
            Highlight {
                x_min: Some(40),
                x_max: Some(10),
            },
        );
        // Shading only changes cell backgrounds, never the glyphs
        assert_eq!(plain, highlighted);
    }

    #[test]
    fn test_highlight_columns_normalize_order() {
        let series = sample_series(60);
        let viewport = Viewport::new(60);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);

        let widget = ChartWidget::new(&series, &viewport, &theme).highlight(Highlight {
            x_min: Some(40),
            x_max: Some(10),
        });
        let (x_lo, x_hi) = widget.highlight_columns(area, 0, 60).unwrap();
        assert!(x_lo <= x_hi);

        let plot = ChartWidget::plot_area(area);
        assert!(x_lo >= plot.x);
        assert!(x_hi < plot.x + plot.width);
    }

    #[test]
    fn test_highlight_outside_window_is_skipped() {
        let series = sample_series(60);
        let mut viewport = Viewport::new(60);
        for _ in 0..20 {
            viewport.zoom_in();
        }
        let theme = Theme::default();
        let area = Rect::new(0, 0, 80, 24);
        let range = viewport.range();

        let widget = ChartWidget::new(&series, &viewport, &theme).highlight(Highlight {
            x_min: Some(0),
            x_max: Some(1),
        });
        if range.start > 1 {
            assert_eq!(widget.highlight_columns(area, range.start, range.end), None);
        }
    }
}
