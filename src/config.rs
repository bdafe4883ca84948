//! System configuration parameters
//!
//! Runtime knobs for the controller.  The state table itself is fixed at
//! build time and is not configurable; these only choose where the cursor
//! starts and how dwell units map onto wall-clock time.

use core::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pins;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    // --- Timing ---
    /// Length of one dwell unit (milliseconds)
    pub dwell_unit_ms: u32,
    /// Host simulation speed-up divisor applied to every wait (1 = real time)
    pub time_scale: u32,

    // --- FSM ---
    /// Row index of the state the cursor starts in
    pub start_state: usize,

    // --- Host simulation ---
    /// Log level name ("off", "error", "warn", "info", "debug", "trace")
    pub log_level: heapless::String<8>,
    /// Stop after this many control cycles (`None` = run forever)
    pub max_cycles: Option<u64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        let mut log_level = heapless::String::new();
        // "info" always fits in 8 bytes.
        let _ = log_level.push_str("info");
        Self {
            // Timing
            dwell_unit_ms: pins::DWELL_UNIT_MS, // 10 ms units
            time_scale: 1,

            // FSM
            start_state: 0, // AllRed

            // Host simulation
            log_level,
            max_cycles: None,
        }
    }
}

impl SystemConfig {
    /// Range-check every field.  Invalid values are rejected, not clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dwell_unit_ms == 0 {
            return Err(ConfigError::ValidationFailed(
                "dwell_unit_ms must be non-zero",
            ));
        }
        if self.time_scale == 0 {
            return Err(ConfigError::ValidationFailed("time_scale must be non-zero"));
        }
        self.level_filter()?;
        Ok(())
    }

    /// Parsed form of [`Self::log_level`].
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| ConfigError::ValidationFailed("log_level is not a known level"))
    }

    /// Milliseconds of real time for `units` dwell units, after scaling.
    pub fn scaled_wait_ms(&self, units: u32) -> u64 {
        scaled_wait_ms(units, self.dwell_unit_ms, self.time_scale)
    }

    /// Parse a JSON config document and validate it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|_| ConfigError::ValidationFailed("config is not valid JSON"))?;
        config.validate()?;
        Ok(config)
    }

    /// Compact postcard blob for device storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ConfigError> {
        postcard::to_allocvec(self).map_err(|_| ConfigError::EncodeFailed)
    }

    /// Decode a stored blob.  A blob that decodes but fails validation is
    /// rejected like any other bad config.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Corrupted)?;
        config.validate()?;
        Ok(config)
    }
}

/// `units` dwell units of `unit_ms` each, divided by `time_scale`
/// (0 is treated as 1).
pub fn scaled_wait_ms(units: u32, unit_ms: u32, time_scale: u32) -> u64 {
    u64::from(units) * u64::from(unit_ms) / u64::from(time_scale.max(1))
}
