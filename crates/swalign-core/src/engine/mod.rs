//! # Engine Module
//!
//! The Smith-Waterman engine: fills the dynamic-programming matrix and recovers every
//! optimal local alignment from it.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Run options such as the enumeration cap
//! - **Score Matrix** ([`matrix`]) - Row-major fill and best-cell tracking
//! - **Backtrace** ([`backtrace`]) - Breadth-first, tie-preserving path enumeration
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine error type wrapping scoring failures
//!
//! Everything built here lives for exactly one alignment call; nothing is cached
//! between calls.

pub mod backtrace;
pub mod config;
pub mod error;
pub mod matrix;
pub mod progress;
