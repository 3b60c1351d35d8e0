//! Saturation Model
//!
//! ## Saturated Vapor Pressure
//!
//! Hyland-Wexler correlation, evaluated on absolute temperature:
//!
//! ```text
//! ln(p_ws) = C1/T + C2 + C3·T + C4·T² + C5·T³ + C6·T⁴ + C7·ln(T)
//! T = t + 273.15   (K)
//! ```
//!
//! The coefficients come from [`SaturationRegime`]: over liquid water for
//! t ≥ 0 °C, over ice below. At exactly 0 °C the curve steps from
//! 611.154 Pa (ice, t → 0⁻) to 611.213 Pa (water, t = 0).
//!
//! ## Enhancement Factor
//!
//! Moist air at real pressure holds slightly more vapor than the ideal-gas
//! mixture would. The correction used here is
//!
//! ```text
//! f = 1 + 0.004·(P / 101325) + (0.0008·t - 0.004)²
//! ```
//!
//! which is always ≥ 1.
//!
//! Neither function validates its inputs. Temperatures at or below absolute
//! zero produce NaN, which the callers in [`crate::state`] turn into errors.

use crate::{
    constants::physics::{
        ENHANCEMENT_PRESSURE_TERM, ENHANCEMENT_TEMP_OFFSET, ENHANCEMENT_TEMP_SLOPE,
        KELVIN_OFFSET, STANDARD_ATMOSPHERE_PA,
    },
    regime::SaturationRegime,
};

/// Convert Celsius to Kelvin
#[inline]
pub fn celsius_to_kelvin(temp_c: f64) -> f64 {
    temp_c + KELVIN_OFFSET
}

/// Saturated vapor pressure (Pa) at `temp_c` (°C)
pub fn saturated_vapor_pressure(temp_c: f64) -> f64 {
    let [c1, c2, c3, c4, c5, c6, c7] = *SaturationRegime::for_temperature(temp_c).coefficients();
    let t = celsius_to_kelvin(temp_c);

    let polynomial = c2 + t * (c3 + t * (c4 + t * (c5 + t * c6)));
    libm::exp(c1 / t + polynomial + c7 * libm::log(t))
}

/// Enhancement factor at total pressure `atm_pressure_pa` and `temp_c`
pub fn enhancement_factor(atm_pressure_pa: f64, temp_c: f64) -> f64 {
    let thermal = ENHANCEMENT_TEMP_SLOPE * temp_c - ENHANCEMENT_TEMP_OFFSET;
    1.0 + ENHANCEMENT_PRESSURE_TERM * atm_pressure_pa / STANDARD_ATMOSPHERE_PA + thermal * thermal
}
