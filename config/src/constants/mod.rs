//! Centralized configuration values shared across the list library.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when two numeric items are compared approximately, for example when
/// collapsing runs of nearly identical coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum nesting depth walked by recursive structural operations such as
/// full flattening or shape inspection.
///
/// Inputs nested deeper than this are rejected instead of exhausting memory.
///
/// # Examples
/// ```
/// use config::constants::MAX_NESTING_DEPTH;
/// assert!(MAX_NESTING_DEPTH >= 64);
/// ```
pub const MAX_NESTING_DEPTH: usize = 512;

/// Bytes of stack space reserved when growing recursion limits using the
/// `stacker` crate.
///
/// # Examples
/// ```
/// use config::constants::STACKER_STACK_SIZE_BYTES;
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 8 * 1024 * 1024;

/// Remaining stack below which `stacker` allocates a fresh segment.
///
/// # Examples
/// ```
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = STACKER_STACK_SIZE_BYTES / 8;

/// Minimum input length before combination generation is split across the
/// rayon thread pool.
///
/// # Examples
/// ```
/// use config::constants::PARALLEL_COMBINATIONS_THRESHOLD;
/// assert!(PARALLEL_COMBINATIONS_THRESHOLD > 1);
/// ```
pub const PARALLEL_COMBINATIONS_THRESHOLD: usize = 16;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================================
// CONFIGURATION SNAPSHOT
// =============================================================================

/// Immutable snapshot of the limits used by the list library.
///
/// # Examples
/// ```
/// use config::constants::ListConfig;
/// let config = ListConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListConfig {
    /// Deepest nesting level structural operations will descend into.
    pub max_depth: usize,
    /// Input length at which combination generation goes parallel.
    pub parallel_threshold: usize,
    /// Tolerance for approximate numeric comparisons.
    pub tolerance: f64,
}

impl ListConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// values.
    ///
    /// # Examples
    /// ```
    /// use config::constants::ListConfig;
    /// let cfg = ListConfig::new(32, 8, 1.0e-6).expect("valid config");
    /// assert_eq!(cfg.max_depth, 32);
    /// ```
    pub fn new(
        max_depth: usize,
        parallel_threshold: usize,
        tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::InvalidDepth(max_depth));
        }
        if !(tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        Ok(Self {
            max_depth,
            parallel_threshold,
            tolerance,
        })
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            parallel_threshold: PARALLEL_COMBINATIONS_THRESHOLD,
            tolerance: EPSILON,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when the nesting cap would forbid even a flat list.
    InvalidDepth(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidDepth(value) => {
                write!(f, "max_depth must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
