//! # Core Module
//!
//! Fundamental building blocks shared by the alignment engine.
//!
//! - **Alignment Representation** ([`models`]) - Gapped alignment pairs and the gap symbol
//! - **Scoring** ([`scoring`]) - Pairwise scores, whole-alignment scoring and substitution matrices

pub mod models;
pub mod scoring;
