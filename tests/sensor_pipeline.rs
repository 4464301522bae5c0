//! Integration tests for the calibrate → read → concentration pipeline.
//!
//! These run on the host over the simulated ADC adapter. Sample
//! intervals are zeroed so the blocking phases finish instantly; the
//! averaging math is unaffected.

use mq303a::adapters::{SimAdc, StdDelay};
use mq303a::{AlcoholSensor, Error, Gas, SensorConfig};

fn fast_config() -> SensorConfig {
    SensorConfig {
        calibration_interval_ms: 0,
        read_interval_ms: 0,
        ..SensorConfig::default()
    }
}

fn assert_close(got: f32, want: f32, tol: f32) {
    assert!(
        (got - want).abs() <= tol,
        "expected {want} within {tol}, got {got}"
    );
}

// ── Calibration ──────────────────────────────────────────────

#[test]
fn constant_input_calibration_reduces_to_scaled_single_sample() {
    // Averaging identical samples is a no-op beyond the clean-air
    // scaling: Ro = R(512) / 60.
    let config = fast_config();
    let sensor = AlcoholSensor::calibrated(SimAdc::constant(512), StdDelay, 0, config).unwrap();

    let expected_rs = sensor.sensor_resistance(512).unwrap();
    assert_close(sensor.ro_kohm(), expected_rs / 60.0, 1e-4);
}

#[test]
fn degenerate_sample_aborts_calibration() {
    let err =
        AlcoholSensor::calibrated(SimAdc::constant(0), StdDelay, 0, fast_config()).unwrap_err();
    assert_eq!(err, Error::SampleOutOfRange { raw: 0 });

    let err =
        AlcoholSensor::calibrated(SimAdc::constant(1023), StdDelay, 0, fast_config()).unwrap_err();
    assert_eq!(err, Error::SampleOutOfRange { raw: 1023 });
}

#[test]
fn degenerate_sample_mid_calibration_surfaces() {
    // Third sample goes bad; the whole phase fails rather than folding
    // garbage into the baseline.
    let adc = SimAdc::sequence([512, 512, 0]);
    let err = AlcoholSensor::calibrated(adc, StdDelay, 0, fast_config()).unwrap_err();
    assert_eq!(err, Error::SampleOutOfRange { raw: 0 });
}

// ── Live reads ───────────────────────────────────────────────

#[test]
fn constant_input_read_equals_single_sample() {
    let mut sensor =
        AlcoholSensor::with_baseline(SimAdc::constant(512), StdDelay, 0, fast_config(), 1.0)
            .unwrap();

    let expected_rs = sensor.sensor_resistance(512).unwrap();
    let rs = sensor.read_rs().unwrap();
    assert_close(rs, expected_rs, 1e-4);
}

#[test]
fn degenerate_sample_mid_read_surfaces() {
    let adc = SimAdc::sequence([512, 0]);
    let mut sensor =
        AlcoholSensor::with_baseline(adc, StdDelay, 0, fast_config(), 1.0).unwrap();
    assert_eq!(sensor.read_rs(), Err(Error::SampleOutOfRange { raw: 0 }));
}

// ── Full pipeline ────────────────────────────────────────────

#[test]
fn unity_ratio_reads_canonical_concentration() {
    // Raw code 930 gives Rs = 10 * (1023 - 930) / 930 = 1.0 kOhm
    // exactly; with Ro forced to 1.0 the ratio is 1.0 and the curve
    // yields ~0.4532 mg/L.
    let mut sensor =
        AlcoholSensor::with_baseline(SimAdc::constant(930), StdDelay, 0, fast_config(), 1.0)
            .unwrap();

    let reading = sensor.read().unwrap();
    assert_close(reading.rs_kohm, 1.0, 1e-5);
    assert_close(reading.ratio, 1.0, 1e-5);
    assert_close(reading.mg_per_l, 0.4532, 1e-3);
}

#[test]
fn concentration_map_has_single_alcohol_entry() {
    let mut sensor =
        AlcoholSensor::with_baseline(SimAdc::constant(930), StdDelay, 0, fast_config(), 1.0)
            .unwrap();

    let map = sensor.concentrations().unwrap();
    assert_eq!(map.len(), 1);
    let mg_per_l = *map.get(&Gas::Alcohol).unwrap();
    assert_close(mg_per_l, 0.4532, 1e-3);
    assert!(map.get(&Gas::Hydrogen).is_none());
}

#[test]
fn reading_serializes_for_telemetry() {
    let mut sensor =
        AlcoholSensor::with_baseline(SimAdc::constant(930), StdDelay, 0, fast_config(), 1.0)
            .unwrap();

    let reading = sensor.read().unwrap();
    let json = serde_json::to_value(reading).unwrap();
    assert!(json.get("rs_kohm").is_some());
    assert!(json.get("ratio").is_some());
    assert!(json.get("mg_per_l").is_some());
}

#[test]
fn calibrated_then_read_in_same_air_is_clean() {
    // Rs equals the calibration-time resistance, so the ratio sits at
    // the clean-air factor and the concentration is negligible.
    let mut sensor =
        AlcoholSensor::calibrated(SimAdc::constant(512), StdDelay, 0, fast_config()).unwrap();

    let reading = sensor.read().unwrap();
    assert_close(reading.ratio, 60.0, 1e-2);
    assert!(reading.mg_per_l < 1e-5, "got {}", reading.mg_per_l);
}

// ── Construction variants ────────────────────────────────────

#[test]
fn manual_baseline_skips_calibration() {
    // The script goes degenerate on its second code, so a calibration
    // pass would fail; with_baseline must not sample at all.
    let adc = SimAdc::sequence([512, 0]);
    let sensor = AlcoholSensor::with_baseline(adc, StdDelay, 0, fast_config(), 2.5).unwrap();
    assert_close(sensor.ro_kohm(), 2.5, f32::EPSILON);
}

#[test]
fn manual_baseline_must_be_positive() {
    let err = AlcoholSensor::with_baseline(
        SimAdc::constant(512),
        StdDelay,
        0,
        fast_config(),
        -0.5,
    )
    .unwrap_err();
    assert_eq!(err, Error::InvalidBaseline);
}

#[test]
fn invalid_config_rejected_up_front() {
    let config = SensorConfig {
        read_samples: 0,
        ..fast_config()
    };
    let err = AlcoholSensor::with_baseline(SimAdc::constant(512), StdDelay, 0, config, 1.0)
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}
