//! MQ-303A alcohol gas sensor model.
//!
//! The sensing element is the lower leg of a voltage divider against a
//! fixed load resistor, so a raw ADC code maps to a sensor resistance.
//! A one-time clean-air calibration fixes the baseline resistance `Ro`;
//! each live read averages a short burst of samples into a smoothed
//! `Rs`. Concentration comes from the Rs/Ro ratio through the gas curve.
//!
//! Construction blocks for the whole calibration phase (about 25 s with
//! the default config). That is intentional: the element needs settling
//! time between samples.

use heapless::LinearMap;
use log::{debug, info};
use serde::Serialize;

use crate::config::SensorConfig;
use crate::curve::Gas;
use crate::error::{Error, Result};
use crate::ports::{AdcReader, DelayNs};

/// Upper bound of entries a concentration map can carry.
pub const MAX_GASES: usize = 4;

/// One polled reading: smoothed resistance, ratio and concentration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AlcoholReading {
    /// Smoothed sensor resistance (kOhm).
    pub rs_kohm: f32,
    /// Rs divided by the clean-air baseline Ro.
    pub ratio: f32,
    /// Estimated alcohol concentration (mg/L).
    pub mg_per_l: f32,
}

/// MQ-303A sensor instance.
///
/// Generic over the ADC capability and the delay source, so targets,
/// hosts and tests each supply their own. `Ro` is fixed at construction
/// and read-only afterwards; taking a new baseline means constructing a
/// new instance.
#[derive(Debug)]
pub struct AlcoholSensor<A, D> {
    adc: A,
    delay: D,
    channel: u8,
    config: SensorConfig,
    ro_kohm: f32,
}

impl<A: AdcReader, D: DelayNs> AlcoholSensor<A, D> {
    /// Construct by calibrating against clean air.
    ///
    /// Takes `calibration_samples` readings spaced by
    /// `calibration_interval_ms`, averages them and divides by the
    /// clean-air factor to fix `Ro`. The element must physically sit in
    /// clean air for the whole phase; that precondition is the
    /// caller's, not verified here.
    ///
    /// A degenerate ADC code during the phase aborts construction with
    /// the error propagated.
    pub fn calibrated(adc: A, delay: D, channel: u8, config: SensorConfig) -> Result<Self> {
        config.validate()?;
        let mut sensor = Self {
            adc,
            delay,
            channel,
            config,
            ro_kohm: 0.0,
        };
        info!(
            "calibrating channel {channel}: {} samples every {} ms",
            config.calibration_samples, config.calibration_interval_ms
        );
        sensor.ro_kohm = sensor.clean_air_baseline()?;
        info!("calibration done, Ro = {:.3} kohm", sensor.ro_kohm);
        Ok(sensor)
    }

    /// Construct with a manually supplied baseline, skipping the
    /// calibration phase.
    pub fn with_baseline(
        adc: A,
        delay: D,
        channel: u8,
        config: SensorConfig,
        ro_kohm: f32,
    ) -> Result<Self> {
        config.validate()?;
        if !ro_kohm.is_finite() || ro_kohm <= 0.0 {
            return Err(Error::InvalidBaseline);
        }
        Ok(Self {
            adc,
            delay,
            channel,
            config,
            ro_kohm,
        })
    }

    /// The clean-air baseline resistance Ro (kOhm).
    pub fn ro_kohm(&self) -> f32 {
        self.ro_kohm
    }

    /// Sensor resistance (kOhm) for one raw ADC code.
    ///
    /// `load * (max_code - raw) / raw`: the divider equation solved for
    /// the lower leg. A code of zero or at/above full scale has no
    /// defined resistance and is rejected.
    pub fn sensor_resistance(&self, raw: u16) -> Result<f32> {
        if raw == 0 || raw >= self.config.adc_max_code {
            return Err(Error::SampleOutOfRange { raw });
        }
        let max_code = f32::from(self.config.adc_max_code);
        Ok(self.config.load_kohm * (max_code - f32::from(raw)) / f32::from(raw))
    }

    /// Smoothed live resistance Rs (kOhm): the arithmetic mean of a
    /// short sample burst.
    ///
    /// Blocks for roughly `read_samples * read_interval_ms`.
    pub fn read_rs(&mut self) -> Result<f32> {
        self.averaged_resistance(self.config.read_samples, self.config.read_interval_ms)
    }

    /// Poll the sensor once.
    pub fn read(&mut self) -> Result<AlcoholReading> {
        let rs_kohm = self.read_rs()?;
        let ratio = rs_kohm / self.ro_kohm;
        let mg_per_l = Gas::Alcohol.concentration(ratio)?;
        Ok(AlcoholReading {
            rs_kohm,
            ratio,
            mg_per_l,
        })
    }

    /// Poll the sensor once and return the per-gas concentration map:
    /// a single entry keyed by the supported gas.
    pub fn concentrations(&mut self) -> Result<LinearMap<Gas, f32, MAX_GASES>> {
        let reading = self.read()?;
        let mut map = LinearMap::new();
        // Capacity covers every Gas variant, insert cannot fail.
        let _ = map.insert(Gas::Alcohol, reading.mg_per_l);
        Ok(map)
    }

    fn clean_air_baseline(&mut self) -> Result<f32> {
        let rs = self.averaged_resistance(
            self.config.calibration_samples,
            self.config.calibration_interval_ms,
        )?;
        Ok(rs / self.config.clean_air_factor)
    }

    fn averaged_resistance(&mut self, samples: u16, interval_ms: u32) -> Result<f32> {
        let mut sum = 0.0f32;
        for _ in 0..samples {
            let raw = self.adc.read(self.channel);
            debug!("channel {}: raw code {raw}", self.channel);
            sum += self.sensor_resistance(raw)?;
            self.delay.delay_ms(interval_ms);
        }
        Ok(sum / f32::from(samples))
    }
}
