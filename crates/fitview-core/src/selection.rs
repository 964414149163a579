//! Drag-to-select range bookkeeping.
//!
//! The renderer resolves pointer events to label indices and forwards them
//! here; this module only tracks the pair of indices and the in-progress
//! state. Indices are kept in event order: a right-to-left drag yields
//! `start > end`, and the renderer normalizes at draw time.

/// Selector mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Mode {
    #[default]
    Idle,
    Selecting,
}

/// Highlight overlay description handed to the renderer.
///
/// While a drag is in progress only `x_min` is set from the new anchor;
/// `x_max` may still carry the previous selection's end until the next
/// pointer-up overwrites it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlight {
    pub x_min: Option<usize>,
    pub x_max: Option<usize>,
}

impl Highlight {
    /// The selected span with endpoints ordered, if both are set.
    pub fn span(&self) -> Option<(usize, usize)> {
        match (self.x_min, self.x_max) {
            (Some(a), Some(b)) => Some((a.min(b), a.max(b))),
            _ => None,
        }
    }
}

/// Tracks a drag selection over the label axis.
///
/// Invariant: `end` is only ever set while `start` is set. Both clear
/// together on [`reset`](Self::reset), which runs when a new recording
/// replaces the current one or on reset-zoom.
#[derive(Debug, Default)]
pub struct RangeSelector {
    start: Option<usize>,
    end: Option<usize>,
    mode: Mode,
}

impl RangeSelector {
    /// Create an idle selector with no indices.
    pub fn new() -> Self {
        Self::default()
    }

    /// First index of the selection, in event order.
    pub fn start(&self) -> Option<usize> {
        self.start
    }

    /// Last index of the selection, in event order.
    pub fn end(&self) -> Option<usize> {
        self.end
    }

    /// Whether a drag is in progress.
    pub fn is_selecting(&self) -> bool {
        self.mode == Mode::Selecting
    }

    /// Current overlay description, raw (unordered) indices.
    pub fn highlight(&self) -> Highlight {
        Highlight {
            x_min: self.start,
            x_max: self.end,
        }
    }

    /// Pointer pressed. `None` means the pointer missed a plotted element
    /// and is ignored. A down while already selecting restarts the
    /// selection at the new index.
    pub fn pointer_down(&mut self, index: Option<usize>) {
        if let Some(index) = index {
            self.start = Some(index);
            self.mode = Mode::Selecting;
        }
    }

    /// Pointer released. Only completes a selection that was started: an up
    /// with no prior down is ignored, and a miss while selecting leaves the
    /// drag open for the next hit.
    pub fn pointer_up(&mut self, index: Option<usize>) {
        if self.mode != Mode::Selecting {
            return;
        }
        if let Some(index) = index {
            self.end = Some(index);
            self.mode = Mode::Idle;
        }
    }

    /// Clear both indices and return to idle.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
        self.mode = Mode::Idle;
    }
}
