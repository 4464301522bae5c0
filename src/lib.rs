//! MQ-303A alcohol sensor pipeline.
//!
//! Converts raw samples from an external 10-bit analog-to-digital
//! converter into an estimated alcohol concentration (mg/L), using a
//! one-time clean-air calibration and the sensor's log-log response
//! curve.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │   SimAdc                StdDelay                         │
//! │   (scripted ADC codes)  (thread::sleep pacing)           │
//! │                                                          │
//! │  ────────────── Port trait boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │            AlcoholSensor (pure pipeline)           │  │
//! │  │  voltage divider · clean-air baseline · gas curve  │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The converter itself is a capability the sensor consumes through
//! [`AdcReader`]; real ADC drivers live outside this crate. Sample
//! pacing goes through [`embedded_hal::delay::DelayNs`], so targets,
//! hosts and tests each supply their own clock.

#![deny(unused_must_use)]

pub mod adapters;
pub mod config;
pub mod curve;
pub mod ports;
pub mod sensors;

mod error;

pub use config::SensorConfig;
pub use curve::{Gas, GasCurve};
pub use error::{Error, Result};
pub use ports::AdcReader;
pub use sensors::{AlcoholReading, AlcoholSensor};
