//! Sensor configuration parameters.
//!
//! The calibration constants of the MQ-303A pipeline: electrical values
//! from the datasheet plus the sampling schedule for the calibration and
//! normal-operation phases. A [`SensorConfig`] is handed to the sensor
//! at construction and held immutably for the instance's lifetime; there
//! is no ambient global state to mutate at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Calibration constants for one sensor instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SensorConfig {
    // --- Electrical ---
    /// Load resistance of the voltage divider (kOhm).
    pub load_kohm: f32,
    /// Sensor resistance in clean air divided by Ro, from the datasheet
    /// chart.
    pub clean_air_factor: f32,
    /// Full-scale ADC code (1023 for a 10-bit converter).
    pub adc_max_code: u16,

    // --- Calibration phase ---
    /// Samples averaged during clean-air calibration.
    pub calibration_samples: u16,
    /// Delay between calibration samples (milliseconds).
    pub calibration_interval_ms: u32,

    // --- Normal operation ---
    /// Samples averaged per live read.
    pub read_samples: u16,
    /// Delay between read samples (milliseconds).
    pub read_interval_ms: u32,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            // Electrical, per the MQ-303A datasheet
            load_kohm: 10.0,
            clean_air_factor: 60.0,
            adc_max_code: 1023,

            // Calibration: the element needs settling time, so this
            // phase deliberately takes ~25 s
            calibration_samples: 50,
            calibration_interval_ms: 500,

            // Normal operation: ~250 ms per smoothed read
            read_samples: 5,
            read_interval_ms: 50,
        }
    }
}

impl SensorConfig {
    /// Validate every field, rejecting out-of-range values.
    ///
    /// Values are rejected, never clamped: a config that asks for zero
    /// samples or a non-positive resistance is a caller bug, not
    /// something to paper over.
    pub fn validate(&self) -> Result<()> {
        if !self.load_kohm.is_finite() || self.load_kohm <= 0.0 {
            return Err(Error::Config("load_kohm must be positive"));
        }
        if !self.clean_air_factor.is_finite() || self.clean_air_factor <= 0.0 {
            return Err(Error::Config("clean_air_factor must be positive"));
        }
        if self.adc_max_code == 0 {
            return Err(Error::Config("adc_max_code must be nonzero"));
        }
        if self.calibration_samples == 0 {
            return Err(Error::Config("calibration_samples must be nonzero"));
        }
        if self.read_samples == 0 {
            return Err(Error::Config("read_samples must be nonzero"));
        }
        Ok(())
    }
}
