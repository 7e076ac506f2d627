use std::fmt;

/// Symbol used on the non-advancing side of an alignment column.
pub const GAP: char = '-';

/// A pairwise local alignment: two equal-length rows over the input alphabet
/// extended with [`GAP`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Alignment {
    pub first: String,
    pub second: String,
}

impl Alignment {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.first.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    /// Iterates the alignment column by column.
    pub fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.first.chars().zip(self.second.chars())
    }

    /// The aligned region of the first sequence with gaps removed.
    pub fn ungapped_first(&self) -> String {
        strip_gaps(&self.first)
    }

    /// The aligned region of the second sequence with gaps removed.
    pub fn ungapped_second(&self) -> String {
        strip_gaps(&self.second)
    }

    /// Returns `true` if some column pairs a gap with a gap.
    pub fn has_double_gap(&self) -> bool {
        self.columns().any(|(a, b)| a == GAP && b == GAP)
    }

    pub fn into_pair(self) -> (String, String) {
        (self.first, self.second)
    }
}

impl From<(String, String)> for Alignment {
    fn from((first, second): (String, String)) -> Self {
        Self { first, second }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.first)?;
        write!(f, "{}", self.second)
    }
}

fn strip_gaps(row: &str) -> String {
    row.chars().filter(|&c| c != GAP).collect()
}
