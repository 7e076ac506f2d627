use nalgebra::DMatrix;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;

const COMMENT_MARKER: char = '#';

#[derive(Debug, Error)]
pub enum MatrixLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to open substitution matrix '{path}': {source}")]
    Open { path: String, source: io::Error },
    #[error("Substitution matrix has no symbol header line")]
    MissingHeader,
    #[error("Parse error on line {line}: {kind}")]
    Parse {
        line: usize,
        kind: MatrixParseErrorKind,
    },
    #[error("Invalid alphabet: {0}")]
    Alphabet(MatrixParseErrorKind),
    #[error("Score table is {rows}x{cols} but the alphabet has {symbols} symbols")]
    InvalidShape {
        symbols: usize,
        rows: usize,
        cols: usize,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixParseErrorKind {
    #[error("Invalid float format (value: '{value}')")]
    InvalidFloat { value: String },
    #[error("Row symbol '{symbol}' does not appear in the header")]
    UnknownRowSymbol { symbol: char },
    #[error("Symbol token '{value}' must be exactly one character")]
    InvalidSymbol { value: String },
    #[error("Symbol '{symbol}' appears more than once in the header")]
    DuplicateSymbol { symbol: char },
    #[error("Expected {expected} scores but found {found}")]
    RowLength { expected: usize, found: usize },
}

/// A square table of pairwise symbol scores keyed by an ordered alphabet.
///
/// The alphabet order is the order of first appearance in the header line, and
/// `scores[(index(a), index(b))]` holds the score of aligning `a` against `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionMatrix {
    symbols: Vec<char>,
    index_by_symbol: HashMap<char, usize>,
    scores: DMatrix<f64>,
}

impl SubstitutionMatrix {
    pub fn new(symbols: Vec<char>, scores: DMatrix<f64>) -> Result<Self, MatrixLoadError> {
        if scores.nrows() != symbols.len() || scores.ncols() != symbols.len() {
            return Err(MatrixLoadError::InvalidShape {
                symbols: symbols.len(),
                rows: scores.nrows(),
                cols: scores.ncols(),
            });
        }
        let index_by_symbol = index_symbols(&symbols).map_err(MatrixLoadError::Alphabet)?;
        Ok(Self {
            symbols,
            index_by_symbol,
            scores,
        })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index_by_symbol.get(&symbol).copied()
    }

    /// Score of `a` against `b`, or `None` if either symbol is outside the alphabet.
    pub fn get(&self, a: char, b: char) -> Option<f64> {
        let row = self.index_of(a)?;
        let col = self.index_of(b)?;
        Some(self.scores[(row, col)])
    }

    /// Parses the whitespace-separated matrix format.
    ///
    /// Leading lines starting with `#` are skipped. The first remaining line names
    /// the alphabet; every later non-blank line is a row symbol followed by one
    /// score per alphabet symbol, in header order. Rows that never appear keep a
    /// score of `0.0`.
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, MatrixLoadError> {
        let mut lines = reader.lines().enumerate();

        let (header_num, header) = loop {
            let Some((line_num, line_res)) = lines.next() else {
                return Err(MatrixLoadError::MissingHeader);
            };
            let line = line_res?;
            if line.starts_with(COMMENT_MARKER) {
                continue;
            }
            break (line_num + 1, line);
        };

        let symbols = header
            .split_whitespace()
            .map(|token| {
                parse_symbol(token).map_err(|kind| MatrixLoadError::Parse {
                    line: header_num,
                    kind,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        if symbols.is_empty() {
            return Err(MatrixLoadError::MissingHeader);
        }
        let index_by_symbol = index_symbols(&symbols).map_err(|kind| MatrixLoadError::Parse {
            line: header_num,
            kind,
        })?;

        let n = symbols.len();
        let mut scores = DMatrix::<f64>::zeros(n, n);

        for (line_num, line_res) in lines {
            let line = line_res?;
            let line_num = line_num + 1;
            let parse_err = |kind: MatrixParseErrorKind| MatrixLoadError::Parse {
                line: line_num,
                kind,
            };

            let mut tokens = line.split_whitespace();
            let Some(symbol_token) = tokens.next() else {
                continue;
            };
            let symbol = parse_symbol(symbol_token).map_err(parse_err)?;
            let row = *index_by_symbol
                .get(&symbol)
                .ok_or_else(|| parse_err(MatrixParseErrorKind::UnknownRowSymbol { symbol }))?;

            let values: Vec<&str> = tokens.collect();
            if values.len() != n {
                return Err(parse_err(MatrixParseErrorKind::RowLength {
                    expected: n,
                    found: values.len(),
                }));
            }
            for (col, value) in values.into_iter().enumerate() {
                scores[(row, col)] = value.parse::<f64>().map_err(|_| {
                    parse_err(MatrixParseErrorKind::InvalidFloat {
                        value: value.to_string(),
                    })
                })?;
            }
        }

        Ok(Self {
            symbols,
            index_by_symbol,
            scores,
        })
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Self, MatrixLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| MatrixLoadError::Open {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

fn parse_symbol(token: &str) -> Result<char, MatrixParseErrorKind> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(MatrixParseErrorKind::InvalidSymbol {
            value: token.to_string(),
        }),
    }
}

fn index_symbols(symbols: &[char]) -> Result<HashMap<char, usize>, MatrixParseErrorKind> {
    let mut index_by_symbol = HashMap::with_capacity(symbols.len());
    for (i, &symbol) in symbols.iter().enumerate() {
        if index_by_symbol.insert(symbol, i).is_some() {
            return Err(MatrixParseErrorKind::DuplicateSymbol { symbol });
        }
    }
    Ok(index_by_symbol)
}
