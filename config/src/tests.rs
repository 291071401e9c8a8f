//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(0.0, 1.0));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_max_nesting_depth_reasonable() {
    // Deep enough for any real coordinate structure, small enough to bound memory
    assert!(MAX_NESTING_DEPTH >= 64);
    assert!(MAX_NESTING_DEPTH <= 10000);
}

#[test]
fn test_red_zone_fits_in_stack_segment() {
    assert!(STACKER_RED_ZONE_BYTES > 0);
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
}

#[test]
fn test_parallel_threshold_above_trivial_sizes() {
    assert!(PARALLEL_COMBINATIONS_THRESHOLD >= 2);
}
