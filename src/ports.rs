//! Port traits: the boundary between the sensor pipeline and hardware.
//!
//! ```text
//!   ADC driver ──▶ AdcReader ──▶ AlcoholSensor (domain)
//! ```
//!
//! Driven adapters implement these traits; the sensor model consumes
//! them via generics and never touches converter hardware directly.

// ───────────────────────────────────────────────────────────────
// ADC port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Blocking read-side port for an external analog-to-digital converter.
///
/// `read` returns the raw conversion code for the given channel, in
/// `0..=max_code` for the converter's resolution. The port declares no
/// failure mode; hardware-level errors are the adapter's concern. One
/// sensor instance owns one reader.
pub trait AdcReader {
    /// Sample the given analog channel once.
    fn read(&mut self, channel: u8) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Delay port
// ───────────────────────────────────────────────────────────────

// Sample pacing uses the ecosystem's blocking-delay trait rather than a
// crate-local invention. Re-exported so implementors don't need a direct
// embedded-hal dependency.
pub use embedded_hal::delay::DelayNs;
