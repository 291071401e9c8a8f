//! # Config Crate
//!
//! Centralized configuration constants for the OpenSCAD list library.
//! Every tunable limit used by the sequence operations is defined here so
//! that the library crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_equal, ListConfig, MAX_NESTING_DEPTH};
//!
//! // Use the default snapshot for structural operations
//! let cfg = ListConfig::default();
//! assert_eq!(cfg.max_depth, MAX_NESTING_DEPTH);
//!
//! // Numeric comparisons share one tolerance
//! assert!(approx_equal(0.1 + 0.2, 0.3));
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Dependency-Free**: Plain constants and one validated snapshot
//! - **OpenSCAD Compatible**: Numeric tolerance matches the evaluator's
//!   equality operator

pub mod constants;

#[cfg(test)]
mod tests;
