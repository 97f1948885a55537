//! Refraction correction of the solar elevation angle according to
//! Saemundsson (1986).
//!
//! Sources:
//! - Saemundsson, P. (1986). "Astronomical Refraction". Sky and Telescope. 72: 70
//! - Meeus, J. (1998): Astronomical Algorithms, 2nd edition, p. 106

/// Reference temperature of the Saemundsson fit [°C].
pub const STANDARD_TEMPERATURE: f64 = 10.0;

/// Reference pressure of the Saemundsson fit [kPa].
pub const STANDARD_PRESSURE: f64 = 101.0;

/// Nominal lower bound of the formula's valid range [degree].
pub const DEFAULT_MIN_ELEVATION: f64 = -1.0;

/// Zenith, upper clip bound [degree].
pub const DEFAULT_MAX_ELEVATION: f64 = 90.0;

/// Additive calibration so the correction vanishes at the zenith
/// (Astronomical Algorithms, p. 106) [arcminute].
const ZENITH_CALIBRATION: f64 = 0.0019279;

/// Saemundsson refraction model for given atmospheric conditions.
///
/// Input elevation angles are clamped into `[min_elevation, max_elevation]`
/// before the formula is applied; out-of-range input saturates silently.
/// The empirical constants are not derivable from first principles and are
/// kept exactly as published.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saemundsson {
    /// Ambient temperature [°C].
    pub temperature: f64,
    /// Ambient pressure [kPa].
    pub pressure: f64,
    /// Lower clip bound [degree].
    pub min_elevation: f64,
    /// Upper clip bound [degree].
    pub max_elevation: f64,
}

impl Default for Saemundsson {
    fn default() -> Self {
        Saemundsson {
            temperature: STANDARD_TEMPERATURE,
            pressure: STANDARD_PRESSURE,
            min_elevation: DEFAULT_MIN_ELEVATION,
            max_elevation: DEFAULT_MAX_ELEVATION,
        }
    }
}

impl Saemundsson {
    pub fn with_conditions(temperature: f64, pressure: f64) -> Self {
        Saemundsson {
            temperature,
            pressure,
            ..Saemundsson::default()
        }
    }

    /// Refraction correction for a true solar elevation angle, in degrees.
    ///
    /// Total over the clipped domain; the caller adds the correction to the
    /// true elevation to obtain the apparent elevation.
    pub fn correction(&self, elevation: f64) -> f64 {
        let h = elevation.clamp(self.min_elevation, self.max_elevation);
        let arcmin = 1.02 / (h + 10.3 / (h + 5.11)).to_radians().tan() + ZENITH_CALIBRATION;
        let scaled = arcmin * (self.pressure / 101.0) * (283.0 / (273.0 + self.temperature));
        scaled * (1.0 / 60.0)
    }

    /// Apparent elevation: true elevation plus the refraction correction.
    pub fn apparent_elevation(&self, elevation: f64) -> f64 {
        elevation + self.correction(elevation)
    }

    /// Element-wise correction over a series, preserving length and order.
    pub fn correction_series(&self, elevations: &[f64]) -> Vec<f64> {
        elevations.iter().map(|&h| self.correction(h)).collect()
    }
}
