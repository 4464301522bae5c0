//! Sensor subsystem: the MQ-303A model and its reading types.

pub mod alcohol;

pub use alcohol::{AlcoholReading, AlcoholSensor, MAX_GASES};
