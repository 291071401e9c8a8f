//! Tests for the list configuration snapshot.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::ListConfig;
/// let cfg = ListConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_config_is_valid() {
    let cfg = ListConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.max_depth >= 1);
    assert_eq!(cfg.parallel_threshold, PARALLEL_COMBINATIONS_THRESHOLD);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ListConfig::new(0, 8, 1.0e-9).unwrap_err(),
        ConfigError::InvalidDepth(0)
    );
    assert_eq!(
        ListConfig::new(16, 8, 0.0).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert!(ListConfig::new(16, 8, f64::NAN).is_err());
}

#[test]
fn config_error_display_names_the_field() {
    assert!(ConfigError::InvalidDepth(0).to_string().contains("max_depth"));
    assert!(ConfigError::InvalidTolerance(-1.0).to_string().contains("tolerance"));
}
