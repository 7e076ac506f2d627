//! # swalign Core Library
//!
//! Optimal local alignment of two symbol sequences with the Smith-Waterman
//! algorithm, enumerating every distinct alignment that reaches the optimal score.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that each concern can be tested on its own:
//!
//! - **[`core`]: The Foundation.** Stateless data models ([`core::models::alignment::Alignment`])
//!   and the scoring layer (`ScoringScheme`, substitution matrices and their file format).
//!
//! - **[`engine`]: The Logic Core.** The dynamic-programming fill, the breadth-first
//!   multi-path backtrace, run configuration, progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into a single
//!   call that aligns two sequences under a scoring scheme.
//!
//! ```ignore
//! use swalign::core::scoring::scheme::ScoringScheme;
//! use swalign::workflows::align;
//!
//! let scheme = ScoringScheme::default();
//! let result = align::align("ACACACTA", "AGCACACA", &scheme)?;
//! assert_eq!(result.best_score, 5.0);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
