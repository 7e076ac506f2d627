use super::matrix::{MatrixLoadError, SubstitutionMatrix};
use crate::core::models::alignment::{Alignment, GAP};
use std::io::BufRead;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Encountered alignment between two gaps")]
    DoubleGap,
    #[error("Symbol '{0}' is not in the current substitution matrix")]
    UnknownSymbol(char),
}

/// The scoring surface the alignment engine depends on.
///
/// The engine asks for one pairwise score per matrix cell and reads the flat gap
/// penalty; nothing else about the scoring configuration leaks into the recurrence.
pub trait PairScorer {
    fn score(&self, a: char, b: char) -> Result<f64, ScoringError>;

    fn gap_penalty(&self) -> f64;
}

/// Scoring parameters plus an optional substitution matrix.
///
/// A loaded matrix takes precedence over `match_score`/`mismatch_penalty` for every
/// non-gap pair. `gap_start_penalty` is only read by [`ScoringScheme::score_alignment`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringScheme {
    pub match_score: f64,
    pub mismatch_penalty: f64,
    pub gap_penalty: f64,
    pub gap_start_penalty: f64,
    matrix: Option<SubstitutionMatrix>,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::new(1.0, -1.0, -1.0, 0.0)
    }
}

impl ScoringScheme {
    pub fn new(
        match_score: f64,
        mismatch_penalty: f64,
        gap_penalty: f64,
        gap_start_penalty: f64,
    ) -> Self {
        Self {
            match_score,
            mismatch_penalty,
            gap_penalty,
            gap_start_penalty,
            matrix: None,
        }
    }

    pub fn with_matrix(mut self, matrix: SubstitutionMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    pub fn set_matrix(&mut self, matrix: SubstitutionMatrix) {
        self.matrix = Some(matrix);
    }

    pub fn matrix(&self) -> Option<&SubstitutionMatrix> {
        self.matrix.as_ref()
    }

    /// Alphabet of the loaded matrix in header order, or `None` without a matrix.
    pub fn symbols(&self) -> Option<&[char]> {
        self.matrix.as_ref().map(SubstitutionMatrix::symbols)
    }

    /// Loads a substitution matrix from a file.
    ///
    /// On failure the scheme keeps whatever matrix it had before the call.
    pub fn load_matrix<P: AsRef<Path>>(&mut self, path: P) -> Result<(), MatrixLoadError> {
        let path = path.as_ref();
        let matrix = SubstitutionMatrix::read_from_path(path)?;
        debug!(
            "Loaded {}-symbol substitution matrix from {:?}",
            matrix.len(),
            path
        );
        self.matrix = Some(matrix);
        Ok(())
    }

    pub fn load_matrix_from(&mut self, reader: &mut impl BufRead) -> Result<(), MatrixLoadError> {
        self.matrix = Some(SubstitutionMatrix::read_from(reader)?);
        Ok(())
    }

    /// Scores a single column.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::DoubleGap`] when both symbols are gaps and
    /// [`ScoringError::UnknownSymbol`] when a matrix is loaded that lacks either symbol.
    pub fn score(&self, a: char, b: char) -> Result<f64, ScoringError> {
        match (a == GAP, b == GAP) {
            (true, true) => Err(ScoringError::DoubleGap),
            (true, false) | (false, true) => Ok(self.gap_penalty),
            (false, false) => self.substitution_score(a, b),
        }
    }

    /// Re-scores a finished alignment column by column.
    ///
    /// Each gap costs `gap_penalty`; a gap that follows a non-gap symbol in the same
    /// row additionally costs `gap_start_penalty`. A gap in the very first column
    /// is not charged the start penalty. Rows of different length are compared up
    /// to the shorter one.
    pub fn score_alignment(&self, first: &str, second: &str) -> Result<f64, ScoringError> {
        let first: Vec<char> = first.chars().collect();
        let second: Vec<char> = second.chars().collect();

        let mut score = 0.0;
        for (i, (&a, &b)) in first.iter().zip(second.iter()).enumerate() {
            let gapped_row = match (a == GAP, b == GAP) {
                (true, true) => return Err(ScoringError::DoubleGap),
                (true, false) => Some(&first),
                (false, true) => Some(&second),
                (false, false) => None,
            };

            match gapped_row {
                Some(row) => {
                    score += self.gap_penalty;
                    if i > 0 && row[i - 1] != GAP {
                        score += self.gap_start_penalty;
                    }
                }
                None => score += self.substitution_score(a, b)?,
            }
        }
        Ok(score)
    }

    pub fn score_aligned(&self, alignment: &Alignment) -> Result<f64, ScoringError> {
        self.score_alignment(&alignment.first, &alignment.second)
    }

    fn substitution_score(&self, a: char, b: char) -> Result<f64, ScoringError> {
        match &self.matrix {
            Some(matrix) => {
                if matrix.index_of(a).is_none() {
                    return Err(ScoringError::UnknownSymbol(a));
                }
                matrix.get(a, b).ok_or(ScoringError::UnknownSymbol(b))
            }
            None if a == b => Ok(self.match_score),
            None => Ok(self.mismatch_penalty),
        }
    }
}

impl PairScorer for ScoringScheme {
    fn score(&self, a: char, b: char) -> Result<f64, ScoringError> {
        ScoringScheme::score(self, a, b)
    }

    fn gap_penalty(&self) -> f64 {
        self.gap_penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const PURINE_MATRIX: &str = "# purine/pyrimidine aware\nA C G T\nA 3 -2 1 -2\nC -2 3 -2 1\nG 1 -2 3 -2\nT -2 1 -2 3\n";

    fn scheme_with_matrix() -> ScoringScheme {
        let mut scheme = ScoringScheme::default();
        scheme
            .load_matrix_from(&mut PURINE_MATRIX.as_bytes())
            .unwrap();
        scheme
    }

    #[test]
    fn default_scheme_uses_unit_scores() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.score('A', 'A'), Ok(1.0));
        assert_eq!(scheme.score('A', 'C'), Ok(-1.0));
        assert_eq!(scheme.gap_start_penalty, 0.0);
        assert_eq!(scheme.symbols(), None);
    }

    #[test]
    fn single_gap_scores_gap_penalty() {
        let scheme = ScoringScheme::new(2.0, -3.0, -4.0, -10.0);
        assert_eq!(scheme.score('-', 'A'), Ok(-4.0));
        assert_eq!(scheme.score('A', '-'), Ok(-4.0));
    }

    #[test]
    fn double_gap_is_rejected() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.score('-', '-'), Err(ScoringError::DoubleGap));
    }

    #[test]
    fn matrix_takes_precedence_over_match_and_mismatch() {
        let scheme = scheme_with_matrix();
        assert_eq!(scheme.score('A', 'A'), Ok(3.0));
        assert_eq!(scheme.score('A', 'G'), Ok(1.0));
        assert_eq!(scheme.score('C', 'G'), Ok(-2.0));
        assert_eq!(scheme.match_score, 1.0);
        assert_eq!(scheme.mismatch_penalty, -1.0);
    }

    #[test]
    fn matrix_does_not_affect_gap_scores() {
        let scheme = scheme_with_matrix();
        assert_eq!(scheme.score('A', '-'), Ok(-1.0));
    }

    #[test]
    fn symbol_outside_matrix_is_rejected() {
        let scheme = scheme_with_matrix();
        assert_eq!(scheme.score('A', 'N'), Err(ScoringError::UnknownSymbol('N')));
        assert_eq!(scheme.score('X', 'A'), Err(ScoringError::UnknownSymbol('X')));
    }

    #[test]
    fn symbols_follow_header_order() {
        let scheme = scheme_with_matrix();
        assert_eq!(scheme.symbols(), Some(&['A', 'C', 'G', 'T'][..]));
    }

    #[test]
    fn failed_load_keeps_previous_matrix() {
        let mut scheme = scheme_with_matrix();
        let result = scheme.load_matrix_from(&mut "A B\nA 1 oops\n".as_bytes());
        assert!(matches!(result, Err(MatrixLoadError::Parse { line: 2, .. })));
        assert_eq!(scheme.symbols().map(<[char]>::len), Some(4));
        assert_eq!(scheme.score('G', 'G'), Ok(3.0));
    }

    #[test]
    fn failed_load_on_fresh_scheme_leaves_no_matrix() {
        let mut scheme = ScoringScheme::default();
        assert!(scheme.load_matrix_from(&mut "".as_bytes()).is_err());
        assert!(scheme.matrix().is_none());
    }

    #[test]
    fn load_matrix_reads_file_and_round_trips_scores() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("purine.mat");
        fs::write(&path, PURINE_MATRIX).unwrap();

        let mut scheme = ScoringScheme::default();
        scheme.load_matrix(&path).unwrap();

        let expected = [
            [3.0, -2.0, 1.0, -2.0],
            [-2.0, 3.0, -2.0, 1.0],
            [1.0, -2.0, 3.0, -2.0],
            [-2.0, 1.0, -2.0, 3.0],
        ];
        let alphabet = ['A', 'C', 'G', 'T'];
        for (i, &a) in alphabet.iter().enumerate() {
            for (j, &b) in alphabet.iter().enumerate() {
                assert_eq!(scheme.score(a, b), Ok(expected[i][j]));
            }
        }
    }

    #[test]
    fn load_matrix_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let mut scheme = ScoringScheme::default();
        let result = scheme.load_matrix(dir.path().join("missing.mat"));
        assert!(matches!(result, Err(MatrixLoadError::Open { .. })));
    }

    #[test]
    fn score_alignment_sums_columns_without_gap_start() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.score_alignment("ACACA", "ACACA"), Ok(5.0));
        assert_eq!(scheme.score_alignment("CACACTA", "CACAC-A"), Ok(5.0));
        assert_eq!(scheme.score_alignment("AC", "AG"), Ok(0.0));
    }

    #[test]
    fn score_alignment_charges_gap_start_once_per_run() {
        let scheme = ScoringScheme::new(1.0, -1.0, -1.0, -2.0);
        // A gap run of length two after a match: two gap penalties, one start penalty.
        assert_eq!(scheme.score_alignment("AC--GT", "ACTTGT"), Ok(4.0 - 2.0 - 2.0));
        // Two separate runs each pay the start penalty.
        assert_eq!(scheme.score_alignment("A-C-G", "ATCTG"), Ok(3.0 - 2.0 - 4.0));
    }

    #[test]
    fn score_alignment_skips_gap_start_in_first_column() {
        let scheme = ScoringScheme::new(1.0, -1.0, -1.0, -2.0);
        assert_eq!(scheme.score_alignment("-A", "TA"), Ok(0.0));
    }

    #[test]
    fn score_alignment_tracks_runs_per_row() {
        let scheme = ScoringScheme::new(1.0, -1.0, -1.0, -2.0);
        // Gap in the second row directly after a gap in the first row starts a new run.
        assert_eq!(scheme.score_alignment("AC-G", "A-TG"), Ok(2.0 - 3.0 - 3.0));
    }

    #[test]
    fn score_alignment_truncates_to_shorter_row() {
        let scheme = ScoringScheme::default();
        assert_eq!(scheme.score_alignment("ACGT", "AC"), Ok(2.0));
        assert_eq!(scheme.score_alignment("", "ACGT"), Ok(0.0));
    }

    #[test]
    fn score_alignment_rejects_double_gap_column() {
        let scheme = ScoringScheme::default();
        assert_eq!(
            scheme.score_alignment("A-C", "A-C"),
            Err(ScoringError::DoubleGap)
        );
    }

    #[test]
    fn score_alignment_uses_matrix_for_substitutions() {
        let scheme = scheme_with_matrix();
        assert_eq!(scheme.score_alignment("AG", "GG"), Ok(4.0));
        assert_eq!(
            scheme.score_alignment("AN", "AN"),
            Err(ScoringError::UnknownSymbol('N'))
        );
    }

    #[test]
    fn score_aligned_matches_string_form() {
        let scheme = ScoringScheme::default();
        let alignment = Alignment::new("CACACTA", "CACAC-A");
        assert_eq!(scheme.score_aligned(&alignment), Ok(5.0));
    }

    #[test]
    fn pair_scorer_delegates_to_scheme() {
        let scheme = ScoringScheme::new(5.0, -4.0, -7.0, 0.0);
        let scorer: &dyn PairScorer = &scheme;
        assert_eq!(scorer.score('T', 'T'), Ok(5.0));
        assert_eq!(scorer.gap_penalty(), -7.0);
    }
}
