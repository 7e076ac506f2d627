//! # Workflows Module
//!
//! High-level entry points. [`align`] runs the complete pipeline: matrix fill,
//! best-cell selection and exhaustive backtrace, with optional progress reporting
//! and an optional cap on the number of enumerated alignments.

pub mod align;
