use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use swalign::engine::progress::{Progress, ProgressCallback};
use tracing::warn;

const SPINNER_TICK_MS: u64 = 80;

/// Drives a single stderr progress bar from engine [`Progress`] events.
#[derive(Clone)]
pub struct CliProgressHandler {
    pb: Arc<Mutex<ProgressBar>>,
}

impl CliProgressHandler {
    pub fn new() -> Self {
        let pb = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr())
            .with_style(Self::spinner_style());
        Self {
            pb: Arc::new(Mutex::new(pb)),
        }
    }

    pub fn get_callback(&self) -> ProgressCallback<'static> {
        let pb_clone = self.pb.clone();

        Box::new(move |progress: Progress| {
            let Ok(pb_guard) = pb_clone.lock() else {
                warn!("Progress bar mutex was poisoned. Cannot update progress.");
                return;
            };

            match progress {
                Progress::FillStart { rows } => {
                    pb_guard.reset();
                    pb_guard.set_length(rows);
                    pb_guard.set_position(0);
                    pb_guard.set_style(Self::bar_style());
                    pb_guard.set_message("Filling score matrix");
                }
                Progress::RowFilled => {
                    pb_guard.inc(1);
                }
                Progress::FillFinish {
                    best_score,
                    best_cells,
                } => {
                    pb_guard.finish_with_message(format!(
                        "✓ Score matrix filled (best {} at {} cell(s))",
                        best_score, best_cells
                    ));
                }
                Progress::BacktraceStart { seeds } => {
                    pb_guard.reset();
                    pb_guard.set_style(Self::spinner_style());
                    pb_guard.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
                    pb_guard.set_message(format!("Tracing back from {} optimal cell(s)", seeds));
                }
                Progress::BacktraceFinish {
                    alignments,
                    truncated,
                } => {
                    pb_guard.disable_steady_tick();
                    let suffix = if truncated { ", truncated" } else { "" };
                    pb_guard.finish_with_message(format!(
                        "✓ {} optimal alignment(s){}",
                        alignments, suffix
                    ));
                }
            }
        })
    }

    /// Removes the bar from the terminal before the report is printed.
    pub fn clear(&self) {
        if let Ok(pb_guard) = self.pb.lock() {
            pb_guard.finish_and_clear();
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::with_template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ")
    }
}
