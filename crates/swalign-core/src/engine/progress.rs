/// Milestones emitted while one alignment is computed.
#[derive(Debug, Clone, PartialEq)]
pub enum Progress {
    FillStart { rows: u64 },
    RowFilled,
    FillFinish { best_score: f64, best_cells: usize },

    BacktraceStart { seeds: usize },
    BacktraceFinish { alignments: usize, truncated: bool },
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback; silent without one.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}
