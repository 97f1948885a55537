//! Barometric pressure-altitude relation for a standard atmosphere with a
//! constant temperature lapse rate.
//!
//! Sources:
//! - Wallace & Hobbs: Atmospheric Science - An Introductory Survey, p. 104

/// Acceleration due to gravity at sea level [m s⁻²].
pub const GRAVITY: f64 = 9.81;

/// Gas constant for dry air [J K⁻¹ kg⁻¹].
pub const GAS_CONSTANT_DRY_AIR: f64 = 287.0;

/// Lapse rate of the U.S. Standard Atmosphere [K m⁻¹].
pub const STANDARD_LAPSE_RATE: f64 = 0.0065;

/// Reference sea-level temperature [K].
pub const SEA_LEVEL_TEMPERATURE: f64 = 273.15 + 10.0;

/// Reference sea-level pressure [kPa].
pub const SEA_LEVEL_PRESSURE: f64 = 101.0;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Constant-lapse-rate atmosphere: `p(z) = p0 * ((T0 - tau*z) / T0) ^ (g / (Rd*tau))`.
///
/// Valid for altitudes below [`StandardAtmosphere::ceiling`], where the
/// linear lapse would reach 0 K. The model itself does not guard the
/// domain; callers keep input within range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardAtmosphere {
    /// Sea-level temperature T0 [K].
    pub sea_level_temperature: f64,
    /// Sea-level pressure p0 [kPa].
    pub sea_level_pressure: f64,
    /// Temperature lapse rate tau [K m⁻¹], positive.
    pub lapse_rate: f64,
}

impl Default for StandardAtmosphere {
    fn default() -> Self {
        StandardAtmosphere {
            sea_level_temperature: SEA_LEVEL_TEMPERATURE,
            sea_level_pressure: SEA_LEVEL_PRESSURE,
            lapse_rate: STANDARD_LAPSE_RATE,
        }
    }
}

impl StandardAtmosphere {
    /// Ambient temperature at a geometric altitude [K].
    pub fn temperature_at(&self, altitude: f64) -> f64 {
        self.sea_level_temperature - self.lapse_rate * altitude
    }

    /// Ambient pressure at a geometric altitude [kPa].
    pub fn pressure_at(&self, altitude: f64) -> f64 {
        let exponent = GRAVITY / (GAS_CONSTANT_DRY_AIR * self.lapse_rate);
        self.sea_level_pressure
            * (self.temperature_at(altitude) / self.sea_level_temperature).powf(exponent)
    }

    /// Altitude where the lapse-rate model reaches 0 K [m]; the model is
    /// undefined from here up.
    pub fn ceiling(&self) -> f64 {
        self.sea_level_temperature / self.lapse_rate
    }

    /// Element-wise pressure over an altitude series, preserving length and
    /// order.
    pub fn pressure_series(&self, altitudes: &[f64]) -> Vec<f64> {
        altitudes.iter().map(|&z| self.pressure_at(z)).collect()
    }
}
