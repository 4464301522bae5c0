//! Gas identifiers and the log-log concentration curve.
//!
//! The MQ-303A response is linear in log-log space: log(Rs/Ro) against
//! log(concentration). A curve is stored as one reference point plus the
//! slope; inverting the line equation recovers concentration from a
//! measured ratio.

use crate::error::{Error, Result};

/// Gases named on the MQ-303A datasheet charts.
///
/// Only [`Gas::Alcohol`] carries a calibration curve in this pipeline.
/// Asking for any other gas reads as a concentration of 0 rather than an
/// error; the single-gas design tolerates the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gas {
    /// Ethanol vapour, the target gas.
    Alcohol,
    /// Hydrogen, a documented cross-sensitivity.
    Hydrogen,
    /// Iso-butane, a documented cross-sensitivity.
    Isobutane,
}

impl Gas {
    /// Stable display name, used as the key when readings are rendered
    /// as a map.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Alcohol => "alcohol",
            Self::Hydrogen => "hydrogen",
            Self::Isobutane => "iso-butane",
        }
    }

    /// The calibration curve for this gas, if the pipeline carries one.
    pub const fn curve(self) -> Option<GasCurve> {
        match self {
            Self::Alcohol => Some(GasCurve::ALCOHOL),
            Self::Hydrogen | Self::Isobutane => None,
        }
    }

    /// Concentration (mg/L) for a measured Rs/Ro ratio.
    ///
    /// A gas without a curve reads as 0.0.
    pub fn concentration(self, ratio: f32) -> Result<f32> {
        match self.curve() {
            Some(curve) => curve.concentration(ratio),
            None => Ok(0.0),
        }
    }
}

/// Point-slope form of a log-log response line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasCurve {
    /// log10 of the concentration at the reference point.
    pub x0: f32,
    /// Logarithm of the Rs/Ro ratio at the reference point.
    pub y0: f32,
    /// Slope of the line in log-log space.
    pub slope: f32,
}

impl GasCurve {
    /// MQ-303A alcohol curve, fitted to the datasheet chart.
    pub const ALCOHOL: Self = Self {
        x0: -0.92,
        y0: 0.34,
        slope: -0.59,
    };

    /// Invert the line for a measured ratio:
    /// `10 ^ (((ln(ratio) - y0) / slope) + x0)`.
    ///
    /// The logarithm is undefined at or below zero, so such ratios are
    /// rejected instead of letting NaN flow downstream.
    pub fn concentration(&self, ratio: f32) -> Result<f32> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(Error::NonPositiveRatio);
        }
        Ok(10f32.powf((ratio.ln() - self.y0) / self.slope + self.x0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alcohol_curve_at_unity_ratio() {
        // ln(1) = 0, so the curve reduces to 10^((-y0/slope) + x0).
        let mg_per_l = GasCurve::ALCOHOL.concentration(1.0).unwrap();
        assert!(
            (mg_per_l - 0.4532).abs() < 1e-3,
            "expected ~0.4532 mg/L at ratio 1.0, got {mg_per_l}"
        );
    }

    #[test]
    fn unsupported_gases_read_zero() {
        assert_eq!(Gas::Hydrogen.concentration(1.0).unwrap(), 0.0);
        assert_eq!(Gas::Isobutane.concentration(0.5).unwrap(), 0.0);
    }

    #[test]
    fn nonpositive_ratio_rejected() {
        assert_eq!(
            GasCurve::ALCOHOL.concentration(0.0),
            Err(Error::NonPositiveRatio)
        );
        assert_eq!(
            GasCurve::ALCOHOL.concentration(-1.0),
            Err(Error::NonPositiveRatio)
        );
        assert_eq!(
            GasCurve::ALCOHOL.concentration(f32::NAN),
            Err(Error::NonPositiveRatio)
        );
        assert_eq!(
            Gas::Alcohol.concentration(0.0),
            Err(Error::NonPositiveRatio)
        );
    }

    #[test]
    fn gas_names_are_stable() {
        assert_eq!(Gas::Alcohol.name(), "alcohol");
        assert_eq!(Gas::Hydrogen.name(), "hydrogen");
        assert_eq!(Gas::Isobutane.name(), "iso-butane");
    }
}
