//! State Derivation
//!
//! Turns saturation quantities into humidity ratios.
//!
//! ### Saturated humidity ratio
//!
//! ```text
//! H_s = 0.62198 · f · p_ws / (P - f · p_ws)
//! ```
//!
//! Singular when the enhanced saturation pressure reaches the total
//! pressure, which at sea level happens just below 100 °C. Past that point
//! the ratio turns negative, which is equally meaningless, so any
//! non-positive denominator is reported as a singularity.
//!
//! ### Actual humidity ratio from the wet bulb
//!
//! The wick is at saturation, so the air reaching it has humidity ratio
//! `H_wb`. An adiabatic energy balance between the wick and the free stream
//! recovers the free-stream ratio `W'`:
//!
//! ```text
//! W' = ((L + a·t_wb)·H_wb - c_pa·(t_db - t_wb)) / (L + c_pv·t_db - c_c·t_wb)
//! ```
//!
//! with `L`, `a`, `c_c` taken from [`BalanceRegime`] (water film above
//! freezing, ice below). A wet bulb reading above the dry bulb is not
//! rejected; it produces a humidity ratio that is larger than saturation,
//! and the caller sees that as relative humidity above 1.

use crate::{
    constants::physics::{MOLAR_MASS_RATIO, VAPOR_SPECIFIC_HEAT_KJ_PER_KG_K},
    errors::PsychroResult,
    regime::BalanceRegime,
    validation::{check_positive_denominator, guarded_div},
};

/// Saturated humidity ratio (kg water / kg dry air)
pub fn saturated_absolute_humidity(
    enhancement: f64,
    saturation_pressure_pa: f64,
    atm_pressure_pa: f64,
) -> PsychroResult<f64> {
    const STAGE: &str = "saturated absolute humidity";
    let enhanced = enhancement * saturation_pressure_pa;
    let denominator = check_positive_denominator(atm_pressure_pa - enhanced, STAGE)?;
    guarded_div(MOLAR_MASS_RATIO * enhanced, denominator, STAGE)
}

/// Humidity ratio of the free stream (kg water / kg dry air)
///
/// `saturated_wet_bulb` is [`saturated_absolute_humidity`] evaluated at the
/// wet-bulb temperature.
pub fn absolute_humidity(
    dry_bulb_c: f64,
    wet_bulb_c: f64,
    saturated_wet_bulb: f64,
) -> PsychroResult<f64> {
    let terms = BalanceRegime::for_dry_bulb(dry_bulb_c).terms();

    let latent = terms.latent_heat + terms.numerator_slope * wet_bulb_c;
    let sensible = BalanceRegime::dry_air_heat() * (dry_bulb_c - wet_bulb_c);
    let denominator = terms.latent_heat
        + VAPOR_SPECIFIC_HEAT_KJ_PER_KG_K * dry_bulb_c
        - terms.condensate_heat * wet_bulb_c;

    guarded_div(latent * saturated_wet_bulb - sensible, denominator, "absolute humidity")
}
