//! Demo driver loop: calibrate once, then poll the sensor and redraw a
//! single terminal line with the current alcohol level.
//!
//! Runs over the simulated ADC adapter, since real converter drivers
//! live outside this crate; the simulated element sits in clean air and
//! receives a periodic breath of alcohol vapour.

#![deny(unused_must_use)]

use std::io::{self, Write};
use std::process;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use mq303a::adapters::StdDelay;
use mq303a::{AdcReader, AlcoholSensor, Gas, SensorConfig};

/// Clean air around code 500, with a periodic simulated breath pushing
/// the element toward full scale (lower resistance, higher reading).
struct BreathAdc {
    tick: u32,
}

impl AdcReader for BreathAdc {
    fn read(&mut self, _channel: u8) -> u16 {
        let tick = self.tick;
        self.tick = self.tick.wrapping_add(1);

        let jitter = (tick % 7) as u16;
        let phase = tick % 600;
        let distance = phase.abs_diff(240);
        if distance < 40 {
            // Breath: ramp toward ~1008 and back down.
            500 + jitter + ((40 - distance) * 127 / 10) as u16
        } else {
            500 + jitter
        }
    }
}

fn main() -> Result<()> {
    println!("Press CTRL+C to abort.");
    ctrlc::set_handler(|| {
        println!("\nAbort by user");
        process::exit(0);
    })?;

    let config = SensorConfig::default();
    let calibration_secs =
        u64::from(config.calibration_samples) * u64::from(config.calibration_interval_ms) / 1000;
    println!("Calibrating (about {calibration_secs} s, keep the sensor in clean air)...");

    let mut sensor = AlcoholSensor::calibrated(BreathAdc { tick: 0 }, StdDelay, 0, config)?;
    println!("Ro = {:.3} kohm", sensor.ro_kohm());

    let mut stdout = io::stdout();
    loop {
        let concentrations = sensor.concentrations()?;
        let mg_per_l = concentrations.get(&Gas::Alcohol).copied().unwrap_or(0.0);

        // Redraw the same terminal line each poll.
        write!(stdout, "\r\x1b[KAlcohol detection level: {mg_per_l:.3} mg/L")?;
        stdout.flush()?;
        thread::sleep(Duration::from_millis(100));
    }
}
