//! Output Quantities
//!
//! Closed-form properties derived from the free-stream humidity ratio `W'`.
//! The dew point needs an iterative inverse and lives in [`crate::dewpoint`].
//!
//! None of these clamp. Relative humidity above 1 or below 0 is a real
//! signal that the two probes disagree with each other, and is returned as
//! computed.

use crate::{
    constants::physics::{
        DRY_AIR_GAS_CONSTANT_KJ_PER_KG_K, DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K,
        LATENT_HEAT_VAPORIZATION_KJ_PER_KG, MOLAR_MASS_RATIO, PA_PER_KPA,
        VAPOR_SPECIFIC_HEAT_KJ_PER_KG_K, VAPOR_VOLUME_FACTOR,
    },
    errors::PsychroResult,
    saturation::celsius_to_kelvin,
    validation::guarded_div,
};

/// Relative humidity as a fraction (nominally 0..1, not clamped)
///
/// Computes the degree of saturation `μ = W' / H_db` and converts it with
///
/// ```text
/// RH = μ / (1 - (1 - μ) · f_db · p_ws,db / P)
/// ```
pub fn relative_humidity(
    saturated_dry_bulb: f64,
    humidity_ratio: f64,
    enhancement_dry_bulb: f64,
    saturation_pressure_dry_bulb_pa: f64,
    atm_pressure_pa: f64,
) -> PsychroResult<f64> {
    let saturation_degree = guarded_div(humidity_ratio, saturated_dry_bulb, "degree of saturation")?;
    let pressure_fraction = enhancement_dry_bulb * saturation_pressure_dry_bulb_pa / atm_pressure_pa;
    guarded_div(
        saturation_degree,
        1.0 - (1.0 - saturation_degree) * pressure_fraction,
        "relative humidity",
    )
}

/// Partial pressure of water vapor (Pa)
///
/// Divides by the wet-bulb enhancement factor, since `W'` was recovered
/// from the wet-bulb saturation state.
pub fn partial_pressure(
    atm_pressure_pa: f64,
    humidity_ratio: f64,
    enhancement_wet_bulb: f64,
) -> PsychroResult<f64> {
    let mole_share = guarded_div(humidity_ratio, MOLAR_MASS_RATIO + humidity_ratio, "partial pressure")?;
    guarded_div(atm_pressure_pa * mole_share, enhancement_wet_bulb, "partial pressure")
}

/// Specific volume of moist air (m³ / kg dry air)
pub fn specific_volume(
    dry_bulb_c: f64,
    humidity_ratio: f64,
    atm_pressure_pa: f64,
) -> PsychroResult<f64> {
    let numerator = DRY_AIR_GAS_CONSTANT_KJ_PER_KG_K
        * celsius_to_kelvin(dry_bulb_c)
        * (1.0 + VAPOR_VOLUME_FACTOR * humidity_ratio);
    Ok(guarded_div(numerator, atm_pressure_pa, "specific volume")? * PA_PER_KPA)
}

/// Specific enthalpy of moist air (kJ / kg dry air), zero at 0 °C dry air
pub fn enthalpy(dry_bulb_c: f64, humidity_ratio: f64) -> f64 {
    DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K * dry_bulb_c
        + humidity_ratio
            * (LATENT_HEAT_VAPORIZATION_KJ_PER_KG + VAPOR_SPECIFIC_HEAT_KJ_PER_KG_K * dry_bulb_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PsychroError;

    const P: f64 = 101_325.0;

    #[test]
    fn saturated_state_is_unity() {
        // W' equal to the saturated ratio means μ = 1 and RH = 1
        let rh = relative_humidity(0.0147582, 0.0147582, 1.0042, 2338.8, P).unwrap();
        assert!((rh - 1.0).abs() < 1e-12);
    }

    #[test]
    fn dry_air_is_zero() {
        let rh = relative_humidity(0.0147582, 0.0, 1.0042, 2338.8, P).unwrap();
        assert_eq!(rh, 0.0);
        assert_eq!(partial_pressure(P, 0.0, 1.004).unwrap(), 0.0);
    }

    #[test]
    fn supersaturation_is_not_clamped() {
        let rh = relative_humidity(0.01, 0.015, 1.004, 2338.8, P).unwrap();
        assert!(rh > 1.0);

        let rh = relative_humidity(0.01, -0.001, 1.004, 2338.8, P).unwrap();
        assert!(rh < 0.0);
    }

    #[test]
    fn zero_saturated_ratio_is_singular() {
        let result = relative_humidity(0.0, 0.01, 1.004, 2338.8, P);
        assert!(matches!(
            result,
            Err(PsychroError::NumericSingularity { stage: "degree of saturation", .. })
        ));
    }

    #[test]
    fn standard_air_volume() {
        // Dry air at 20 °C: R·T/P = 0.287055 · 293.15 / 101.325
        let v = specific_volume(20.0, 0.0, P).unwrap();
        assert!((v - 0.83050).abs() < 1e-4);

        // Moisture makes air lighter per unit volume, so volume goes up
        assert!(specific_volume(20.0, 0.01, P).unwrap() > v);

        // Half the pressure, twice the volume
        let thin = specific_volume(20.0, 0.0, P / 2.0).unwrap();
        assert!((thin - 2.0 * v).abs() < 1e-12);
    }

    #[test]
    fn enthalpy_reference_points() {
        assert_eq!(enthalpy(0.0, 0.0), 0.0);
        assert!((enthalpy(25.0, 0.010072818) - 50.7966).abs() < 1e-3);
        // Cold dry air carries negative enthalpy
        assert!(enthalpy(-10.0, 0.0006) < 0.0);
    }

    #[test]
    fn zero_pressure_volume_is_singular() {
        assert!(matches!(
            specific_volume(20.0, 0.0, 0.0),
            Err(PsychroError::NumericSingularity { .. })
        ));
    }
}
