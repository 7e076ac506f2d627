use super::matrix::{Cell, ScoreMatrix};
use crate::core::models::alignment::{Alignment, GAP};
use crate::core::scoring::scheme::{PairScorer, ScoringError};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Alignments recovered from a [`ScoreMatrix`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceOutcome {
    pub alignments: Vec<Alignment>,
    /// Set when `limit` stopped the enumeration before every path was emitted.
    pub truncated: bool,
}

/// A path under construction. Rows are accumulated back to front and reversed
/// when the path reaches a zero cell.
#[derive(Debug, Clone)]
struct PartialPath {
    first_rev: Vec<char>,
    second_rev: Vec<char>,
    cell: Cell,
}

impl PartialPath {
    fn seed(cell: Cell) -> Self {
        Self {
            first_rev: Vec::new(),
            second_rev: Vec::new(),
            cell,
        }
    }

    fn step(&self, a: char, b: char, cell: Cell) -> Self {
        let mut next = self.clone();
        next.first_rev.push(a);
        next.second_rev.push(b);
        next.cell = cell;
        next
    }

    fn into_alignment(self) -> Alignment {
        Alignment {
            first: self.first_rev.into_iter().rev().collect(),
            second: self.second_rev.into_iter().rev().collect(),
        }
    }
}

/// Enumerates every optimal local alignment, level by level.
///
/// All paths start at the matrix's optimal cells. A path on a zero cell is
/// complete; any other path branches into each of the diagonal, vertical and
/// horizontal predecessors whose term reproduces the cell value exactly. Complete
/// alignments are de-duplicated by content and keep the order in which they were
/// first reached. The number of paths can grow exponentially with the number of
/// tied terms; `limit` bounds the number of distinct alignments returned.
pub fn trace_all<S>(
    matrix: &ScoreMatrix,
    first: &[char],
    second: &[char],
    scorer: &S,
    limit: Option<usize>,
) -> Result<TraceOutcome, ScoringError>
where
    S: PairScorer + ?Sized,
{
    let gap = scorer.gap_penalty();
    let mut outcome = TraceOutcome::default();
    let mut seen: HashSet<Alignment> = HashSet::new();

    let mut frontier: Vec<PartialPath> = matrix
        .best_cells()
        .iter()
        .map(|&cell| PartialPath::seed(cell))
        .collect();
    let mut depth = 0usize;

    'levels: while !frontier.is_empty() {
        trace!("Backtrace depth {} with {} live path(s).", depth, frontier.len());
        let mut next = Vec::new();

        for path in frontier {
            let (i, j) = path.cell;
            let value = matrix.get((i, j));

            if value == 0.0 {
                let alignment = path.into_alignment();
                if seen.contains(&alignment) {
                    continue;
                }
                if limit.is_some_and(|max| outcome.alignments.len() >= max) {
                    outcome.truncated = true;
                    break 'levels;
                }
                seen.insert(alignment.clone());
                outcome.alignments.push(alignment);
                continue;
            }

            let a = first[i - 1];
            let b = second[j - 1];
            if value == matrix.get((i - 1, j - 1)) + scorer.score(a, b)? {
                next.push(path.step(a, b, (i - 1, j - 1)));
            }
            if value == matrix.get((i - 1, j)) + gap {
                next.push(path.step(a, GAP, (i - 1, j)));
            }
            if value == matrix.get((i, j - 1)) + gap {
                next.push(path.step(GAP, b, (i, j - 1)));
            }
        }

        frontier = next;
        depth += 1;
    }

    debug!(
        "Backtrace emitted {} distinct alignment(s){}.",
        outcome.alignments.len(),
        if outcome.truncated { " (truncated)" } else { "" }
    );
    Ok(outcome)
}
