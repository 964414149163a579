//! Application state and update logic for the fitview TUI.

use std::path::PathBuf;

use ratatui::layout::Rect;
use tokio::sync::mpsc;

use fitview_core::{
    load_ride, project, DisplaySeries, LoadOutcome, RangeSelector, Record, RequestTracker,
    RideSummary, SeriesSelection,
};

use crate::chart::{ChartWidget, Viewport};
use crate::event::Action;

/// Application state.
///
/// Every cell here has exactly one writer: the event loop. Load completions
/// arrive over the outcome channel and are applied between events.
#[derive(Debug)]
pub struct App {
    /// Whether the app should quit.
    pub should_quit: bool,

    /// Whether the help overlay is visible.
    pub show_help: bool,

    /// File the viewer was opened on.
    pub file: PathBuf,

    /// Parsed recording, once a load has succeeded.
    pub records: Option<Vec<Record>>,

    /// Which series are visible.
    pub selection: SeriesSelection,

    /// Drag-to-select state.
    pub selector: RangeSelector,

    /// Display-ready projection of `records` under `selection`.
    pub display: DisplaySeries,

    /// Zoom/pan window, renderer-local.
    pub viewport: Viewport,

    /// Transient status message (load errors and the like).
    pub status: Option<String>,

    /// Whether a load is in flight.
    pub loading: bool,

    /// Chart pane rect from the last draw, for pointer hit-testing.
    pub chart_area: Option<Rect>,

    requests: RequestTracker,
    outcome_tx: mpsc::UnboundedSender<LoadOutcome>,
    outcome_rx: mpsc::UnboundedReceiver<LoadOutcome>,
}

impl App {
    /// Create an app with nothing loaded yet.
    pub fn new(file: PathBuf) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            show_help: false,
            file,
            records: None,
            selection: SeriesSelection::default(),
            selector: RangeSelector::new(),
            display: DisplaySeries::default(),
            viewport: Viewport::default(),
            status: None,
            loading: false,
            chart_area: None,
            requests: RequestTracker::new(),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Start loading `self.file` in the background.
    ///
    /// Repeated calls race freely; [`apply_load_outcome`](Self::apply_load_outcome)
    /// keeps only the completion for the latest request.
    pub fn start_load(&mut self) {
        let request = self.requests.begin();
        self.loading = true;
        let path = self.file.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = load_ride(&path).await;
            let _ = tx.send(LoadOutcome { request, result });
        });
    }

    /// Drain and apply any completed loads (non-blocking).
    pub fn process_load_outcomes(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_load_outcome(outcome);
        }
    }

    /// Apply one load completion. Stale completions are discarded.
    pub fn apply_load_outcome(&mut self, outcome: LoadOutcome) {
        if !self.requests.is_current(outcome.request) {
            return;
        }
        self.loading = false;
        match outcome.result {
            Ok(records) => {
                // The new recording replaces all prior state
                self.viewport = Viewport::new(records.len());
                self.selector.reset();
                self.display = project(&records, self.selection);
                self.records = Some(records);
                self.status = None;
            }
            Err(e) => {
                // Prior display stays on screen unchanged
                self.status = Some(format!("load failed: {e}"));
            }
        }
    }

    /// Handle an action from the event loop.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.show_help = !self.show_help,
            Action::TogglePower => {
                self.selection.show_power = !self.selection.show_power;
                self.refresh_display();
            }
            Action::ToggleHeartRate => {
                self.selection.show_heart_rate = !self.selection.show_heart_rate;
                self.refresh_display();
            }
            Action::ResetZoom => {
                // Selection and zoom are invalidated together
                self.viewport.reset();
                self.selector.reset();
            }
            Action::ClearSelection => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.selector.reset();
                }
            }
            Action::ZoomIn => self.viewport.zoom_in(),
            Action::ZoomOut => self.viewport.zoom_out(),
            Action::PanLeft => self.viewport.pan_left(),
            Action::PanRight => self.viewport.pan_right(),
            // Reload spawns a task; the run loop handles it
            Action::Reload | Action::None => {}
        }
    }

    /// Left button pressed at a terminal position.
    pub fn pointer_down(&mut self, column: u16, row: u16) {
        let hit = self.hit_test(column, row);
        self.selector.pointer_down(hit);
    }

    /// Left button released at a terminal position.
    pub fn pointer_up(&mut self, column: u16, row: u16) {
        let hit = self.hit_test(column, row);
        self.selector.pointer_up(hit);
    }

    /// Resolve a terminal position to a label index, or `None` on a miss.
    fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.chart_area?;
        let plot = ChartWidget::plot_area(area);
        if row < plot.y || row >= plot.y + plot.height {
            return None;
        }
        let index = self.viewport.x_to_index(column, plot.x, plot.width)?;
        // The pointer must land on a plotted element
        if index >= self.display.labels.len() {
            return None;
        }
        Some(index)
    }

    /// Summary of the loaded ride, for the status bar.
    pub fn summary(&self) -> Option<RideSummary> {
        self.records.as_deref().map(RideSummary::from_records)
    }

    /// Selected span as elapsed-time labels, endpoints ordered.
    pub fn selection_labels(&self) -> Option<(String, String)> {
        let (lo, hi) = self.selector.highlight().span()?;
        let labels = &self.display.labels;
        Some((labels.get(lo)?.clone(), labels.get(hi)?.clone()))
    }

    fn refresh_display(&mut self) {
        self.display = match &self.records {
            Some(records) => project(records, self.selection),
            None => DisplaySeries::default(),
        };
    }

    /// Install records as if a load had just completed.
    #[cfg(test)]
    pub(crate) fn install_records(&mut self, records: Vec<Record>) {
        let request = self.requests.begin();
        self.apply_load_outcome(LoadOutcome {
            request,
            result: Ok(records),
        });
    }
}
