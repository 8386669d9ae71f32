//! # Configuration Tests
//!
//! Tests for configuration defaults and JSON deserialization.

use rstest::rstest;
use sparcsim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_accesses);
    assert_eq!(config.timer.tick_period, 1);
    assert_eq!(config.timer.stick_period, 1000);
    assert_eq!(config.strand.n_windows, 8);
    assert_eq!(config.strand.max_gl, 3);
    assert_eq!(config.strand.strand_status_reset, 0x50000);
}

#[test]
fn test_empty_json_takes_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.timer.stick_period, 1000);
    assert_eq!(config.strand.n_windows, 8);
}

#[test]
fn test_partial_section_keeps_other_fields() {
    let config = Config::from_json(r#"{ "timer": { "tick_period": 250 } }"#).unwrap();
    assert_eq!(config.timer.tick_period, 250);
    assert_eq!(config.timer.stick_period, 1000);
}

#[rstest]
#[case(r#"{ "strand": { "n_windows": 4 } }"#, 4, 3)]
#[case(r#"{ "strand": { "max_gl": 1 } }"#, 8, 1)]
#[case(r#"{ "strand": { "n_windows": 16, "max_gl": 7 } }"#, 16, 7)]
fn test_strand_overrides(#[case] json: &str, #[case] windows: u64, #[case] max_gl: u64) {
    let config = Config::from_json(json).unwrap();
    assert_eq!(config.strand.n_windows, windows);
    assert_eq!(config.strand.max_gl, max_gl);
}

#[rstest]
#[case(r#"{ "timer": { "tick_period": -1 } }"#)]
#[case(r#"{ "general": { "trace_accesses": "yes" } }"#)]
#[case("[1, 2, 3]")]
fn test_malformed_json_is_rejected(#[case] json: &str) {
    assert!(Config::from_json(json).is_err());
}
