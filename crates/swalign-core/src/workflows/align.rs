use crate::core::models::alignment::Alignment;
use crate::core::scoring::scheme::PairScorer;
use crate::engine::backtrace;
use crate::engine::config::AlignmentConfig;
use crate::engine::error::EngineError;
use crate::engine::matrix::ScoreMatrix;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentResult {
    pub best_score: f64,
    pub alignments: Vec<Alignment>,
    pub truncated: bool,
}

impl AlignmentResult {
    /// Returns `true` when no positive-scoring local alignment exists.
    pub fn is_degenerate(&self) -> bool {
        self.alignments.is_empty() && !self.truncated
    }
}

/// Aligns two sequences exhaustively with default run options and no progress output.
pub fn align<S>(first: &str, second: &str, scorer: &S) -> Result<AlignmentResult, EngineError>
where
    S: PairScorer + ?Sized,
{
    run(
        first,
        second,
        scorer,
        &AlignmentConfig::default(),
        &ProgressReporter::new(),
    )
}

#[instrument(skip_all, name = "align_workflow", fields(first_len = first.chars().count(), second_len = second.chars().count()))]
pub fn run<S>(
    first: &str,
    second: &str,
    scorer: &S,
    config: &AlignmentConfig,
    reporter: &ProgressReporter,
) -> Result<AlignmentResult, EngineError>
where
    S: PairScorer + ?Sized,
{
    let first: Vec<char> = first.chars().collect();
    let second: Vec<char> = second.chars().collect();

    // === Phase 1: Matrix fill ===
    let matrix = ScoreMatrix::fill(&first, &second, scorer, reporter)?;

    // === Phase 2: Backtrace ===
    reporter.report(Progress::BacktraceStart {
        seeds: matrix.best_cells().len(),
    });
    let outcome = backtrace::trace_all(&matrix, &first, &second, scorer, config.max_alignments)?;
    reporter.report(Progress::BacktraceFinish {
        alignments: outcome.alignments.len(),
        truncated: outcome.truncated,
    });

    info!(
        "Best local score {} with {} optimal alignment(s).",
        matrix.best_score(),
        outcome.alignments.len()
    );

    Ok(AlignmentResult {
        best_score: matrix.best_score(),
        alignments: outcome.alignments,
        truncated: outcome.truncated,
    })
}
