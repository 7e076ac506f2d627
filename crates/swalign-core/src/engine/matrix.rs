use super::progress::{Progress, ProgressReporter};
use crate::core::scoring::scheme::{PairScorer, ScoringError};
use nalgebra::DMatrix;
use tracing::{debug, trace};

/// A cell coordinate `(i, j)`: `i` indexes the first sequence, `j` the second,
/// both offset by one for the zero boundary row and column.
pub type Cell = (usize, usize);

/// The filled Smith-Waterman matrix together with its optimal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    cells: DMatrix<f64>,
    best_score: f64,
    best_cells: Vec<Cell>,
}

impl ScoreMatrix {
    /// Fills the `(n+1) x (m+1)` matrix row by row.
    ///
    /// Each cell takes the maximum of the diagonal, vertical and horizontal terms
    /// and `0.0`. While filling, a positive cell equal to the running best score is
    /// appended to the optimal cells and a strictly better cell resets them, so the
    /// final list holds exactly the cells that reach the global maximum in row-major
    /// order. An all-zero matrix keeps a best score of `0.0` and no optimal cells.
    pub fn fill<S>(
        first: &[char],
        second: &[char],
        scorer: &S,
        reporter: &ProgressReporter,
    ) -> Result<Self, ScoringError>
    where
        S: PairScorer + ?Sized,
    {
        let rows = first.len() + 1;
        let cols = second.len() + 1;
        let gap = scorer.gap_penalty();

        let mut cells = DMatrix::<f64>::zeros(rows, cols);
        let mut best_score = 0.0;
        let mut best_cells = Vec::new();

        reporter.report(Progress::FillStart {
            rows: first.len() as u64,
        });
        debug!("Filling {}x{} score matrix.", rows, cols);

        for i in 1..rows {
            for j in 1..cols {
                let diagonal = cells[(i - 1, j - 1)] + scorer.score(first[i - 1], second[j - 1])?;
                let up = cells[(i - 1, j)] + gap;
                let left = cells[(i, j - 1)] + gap;
                let value = diagonal.max(up).max(left).max(0.0);
                cells[(i, j)] = value;

                if value > best_score {
                    best_score = value;
                    best_cells.clear();
                    best_cells.push((i, j));
                } else if value > 0.0 && value == best_score {
                    best_cells.push((i, j));
                }
            }
            reporter.report(Progress::RowFilled);
        }

        trace!(
            "Best score {} reached at {} cell(s): {:?}",
            best_score,
            best_cells.len(),
            best_cells
        );
        reporter.report(Progress::FillFinish {
            best_score,
            best_cells: best_cells.len(),
        });

        Ok(Self {
            cells,
            best_score,
            best_cells,
        })
    }

    pub fn get(&self, (i, j): Cell) -> f64 {
        self.cells[(i, j)]
    }

    pub fn best_score(&self) -> f64 {
        self.best_score
    }

    pub fn best_cells(&self) -> &[Cell] {
        &self.best_cells
    }

    pub fn nrows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn cells(&self) -> &DMatrix<f64> {
        &self.cells
    }
}
