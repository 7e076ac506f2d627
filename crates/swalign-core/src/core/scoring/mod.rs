//! # Scoring Module
//!
//! Turns symbol pairs, gaps and externally supplied substitution matrices into
//! numeric scores.
//!
//! ## Key Components
//!
//! - [`scheme`] - The [`scheme::ScoringScheme`] configuration object and the
//!   [`scheme::PairScorer`] trait consumed by the alignment engine
//! - [`matrix`] - Substitution matrices and their whitespace-separated text format
//!
//! Gaps always cost a single flat `gap_penalty` inside the dynamic-programming
//! recurrence. The `gap_start_penalty` only participates when a finished alignment
//! is re-scored through [`scheme::ScoringScheme::score_alignment`].

pub mod matrix;
pub mod scheme;
