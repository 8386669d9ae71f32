//! Configuration system for the strand register model.
//!
//! This module defines the structures used to parameterize a register bank. It provides:
//! 1. **Defaults:** Baseline T1 implementation constants and timer scaling.
//! 2. **Structures:** Hierarchical config for general, timer, and strand settings.
//!
//! Configuration is supplied as JSON by the owning simulator, or use `Config::default()`.

use serde::Deserialize;

use crate::common::constants;

/// Default configuration constants.
///
/// These values describe a Niagara (T1) strand when not explicitly overridden.
mod defaults {
    /// Simulated time units per `TICK` increment (one CPU cycle).
    pub const TICK_PERIOD: u64 = 1;

    /// Simulated time units per `STICK` increment (one nanosecond at 1 tick/ps).
    pub const STICK_PERIOD: u64 = 1000;
}

/// Root configuration structure for a register bank.
///
/// # Examples
///
/// ```
/// use sparcsim_core::config::Config;
///
/// let json = r#"{
///     "general": { "trace_accesses": true },
///     "timer": { "tick_period": 500, "stick_period": 1000 },
///     "strand": { "n_windows": 8, "max_gl": 3 }
/// }"#;
///
/// let config: Config = serde_json::from_str(json).unwrap();
/// assert!(config.general.trace_accesses);
/// assert_eq!(config.timer.tick_period, 500);
/// assert_eq!(config.strand.strand_status_reset, 0x50000);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Compare-timer scaling
    #[serde(default)]
    pub timer: TimerConfig,
    /// Strand implementation parameters
    #[serde(default)]
    pub strand: StrandConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Arguments
    ///
    /// * `json` - The JSON text. Missing sections and fields take their defaults.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or the `serde_json` error describing the problem.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneralConfig {
    /// Emit a `tracing` event for every effectful register access
    #[serde(default)]
    pub trace_accesses: bool,
}

/// Scaling from counter units to simulated time units.
///
/// A compare register armed `delta` counts ahead of its reference counter
/// schedules its event `delta * period` time units in the future.
#[derive(Debug, Clone, Deserialize)]
pub struct TimerConfig {
    /// Time units per `TICK` count
    #[serde(default = "TimerConfig::default_tick_period")]
    pub tick_period: u64,

    /// Time units per `STICK` count (also used by `HSTICK_CMPR`)
    #[serde(default = "TimerConfig::default_stick_period")]
    pub stick_period: u64,
}

impl TimerConfig {
    /// Returns the default tick period.
    fn default_tick_period() -> u64 {
        defaults::TICK_PERIOD
    }

    /// Returns the default stick period.
    fn default_stick_period() -> u64 {
        defaults::STICK_PERIOD
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            tick_period: defaults::TICK_PERIOD,
            stick_period: defaults::STICK_PERIOD,
        }
    }
}

/// Strand implementation parameters reported through `HVER` and reset.
#[derive(Debug, Clone, Deserialize)]
pub struct StrandConfig {
    /// Number of register windows
    #[serde(default = "StrandConfig::default_n_windows")]
    pub n_windows: u64,

    /// Highest global register set index
    #[serde(default = "StrandConfig::default_max_gl")]
    pub max_gl: u64,

    /// Value loaded into the strand status register on reset
    #[serde(default = "StrandConfig::default_strand_status_reset")]
    pub strand_status_reset: u64,
}

impl StrandConfig {
    /// Returns the default window count.
    fn default_n_windows() -> u64 {
        constants::NWINDOWS
    }

    /// Returns the default maximum global set.
    fn default_max_gl() -> u64 {
        constants::MAX_GL
    }

    /// Returns the default strand status reset value.
    fn default_strand_status_reset() -> u64 {
        constants::STRAND_STATUS_RESET
    }
}

impl Default for StrandConfig {
    fn default() -> Self {
        Self {
            n_windows: constants::NWINDOWS,
            max_gl: constants::MAX_GL,
            strand_status_reset: constants::STRAND_STATUS_RESET,
        }
    }
}
