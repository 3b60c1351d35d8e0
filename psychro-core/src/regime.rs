//! Physical Regime Switches
//!
//! Three independent switches pick coefficient sets by sign. Each is a
//! small enum with a `for_*` constructor, so the branch lives in exactly one
//! place and can be audited on its own:
//!
//! | Switch | Selected by | Variants |
//! |---|---|---|
//! | [`SaturationRegime`] | sign of T | over water (T ≥ 0), over ice (T < 0) |
//! | [`BalanceRegime`] | sign of dry-bulb T | above / below freezing |
//! | [`SeedRegime`] | sign of the cubic dew-point estimate | cubic / quadratic |
//!
//! The saturation switch is a real phase boundary. Vapor pressure over ice
//! and over supercooled water differ, so [`saturated_vapor_pressure`] jumps
//! by roughly 0.06 Pa at exactly 0 °C. That jump is expected.
//!
//! [`saturated_vapor_pressure`]: crate::saturation::saturated_vapor_pressure

use crate::constants::physics::{
    DEW_SEED_CUBIC, DEW_SEED_CUBIC_EXPONENT, DEW_SEED_QUADRATIC,
    DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K, ICE_SPECIFIC_HEAT_KJ_PER_KG_K,
    LATENT_HEAT_FUSION_KJ_PER_KG, LATENT_HEAT_VAPORIZATION_KJ_PER_KG,
    LIQUID_WATER_SPECIFIC_HEAT_KJ_PER_KG_K, SATURATION_OVER_ICE, SATURATION_OVER_WATER,
    VAPOR_SPECIFIC_HEAT_KJ_PER_KG_K, WET_BULB_LATENT_SLOPE_KJ_PER_KG_K,
};

/// Which saturation curve applies at a temperature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SaturationRegime {
    /// T ≥ 0 °C, equilibrium over liquid water
    OverWater,
    /// T < 0 °C, equilibrium over ice
    OverIce,
}

impl SaturationRegime {
    /// Select the regime for a temperature in °C
    pub fn for_temperature(temp_c: f64) -> Self {
        if temp_c >= 0.0 {
            Self::OverWater
        } else {
            Self::OverIce
        }
    }

    /// Seven correlation coefficients `C1..C7` for this regime
    pub fn coefficients(self) -> &'static [f64; 7] {
        match self {
            Self::OverWater => &SATURATION_OVER_WATER,
            Self::OverIce => &SATURATION_OVER_ICE,
        }
    }
}

/// Wet-bulb energy balance terms for one side of freezing
///
/// The balance reads
/// `W' = (latent(T_wb)·H_wb - c_pa·(T_db - T_wb)) / (L + c_pv·T_db - c_cond·T_wb)`,
/// where `latent(T_wb) = L + numerator_slope·T_wb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BalanceTerms {
    /// Latent heat at 0 °C of the phase change on the wick (kJ/kg)
    pub latent_heat: f64,
    /// Wet-bulb coefficient in the numerator latent term (kJ/kg·K)
    pub numerator_slope: f64,
    /// Wet-bulb coefficient in the denominator (kJ/kg·K)
    pub condensate_heat: f64,
}

/// Which energy balance governs the wet bulb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BalanceRegime {
    /// Dry bulb at or above 0 °C, liquid film on the wick
    AboveFreezing,
    /// Dry bulb below 0 °C, ice on the wick
    BelowFreezing,
}

impl BalanceRegime {
    /// Select the regime from the dry-bulb temperature in °C
    pub fn for_dry_bulb(dry_bulb_c: f64) -> Self {
        if dry_bulb_c >= 0.0 {
            Self::AboveFreezing
        } else {
            Self::BelowFreezing
        }
    }

    /// Energy balance terms for this regime
    pub fn terms(self) -> BalanceTerms {
        match self {
            Self::AboveFreezing => BalanceTerms {
                latent_heat: LATENT_HEAT_VAPORIZATION_KJ_PER_KG,
                numerator_slope: -WET_BULB_LATENT_SLOPE_KJ_PER_KG_K,
                condensate_heat: LIQUID_WATER_SPECIFIC_HEAT_KJ_PER_KG_K,
            },
            Self::BelowFreezing => BalanceTerms {
                latent_heat: LATENT_HEAT_VAPORIZATION_KJ_PER_KG + LATENT_HEAT_FUSION_KJ_PER_KG,
                numerator_slope: VAPOR_SPECIFIC_HEAT_KJ_PER_KG_K - ICE_SPECIFIC_HEAT_KJ_PER_KG_K,
                condensate_heat: ICE_SPECIFIC_HEAT_KJ_PER_KG_K,
            },
        }
    }

    /// Specific heat of dry air used by both regimes (kJ/kg·K)
    pub const fn dry_air_heat() -> f64 {
        DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K
    }
}

/// Which polynomial seeds the dew-point bisection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SeedRegime {
    /// Cubic in ln(p_w) plus a power term, dew point at or above 0 °C
    Cubic,
    /// Quadratic in ln(p_w), dew point below 0 °C
    Quadratic,
}

impl SeedRegime {
    /// Evaluate this regime's polynomial.
    ///
    /// `alpha` is `ln(p_w / 1000)` and `vapor_kpa` is `p_w / 1000`.
    pub fn evaluate(self, alpha: f64, vapor_kpa: f64) -> f64 {
        match self {
            Self::Cubic => {
                let [c0, c1, c2, c3, c4] = DEW_SEED_CUBIC;
                c0 + alpha * (c1 + alpha * (c2 + alpha * c3))
                    + c4 * libm::pow(vapor_kpa, DEW_SEED_CUBIC_EXPONENT)
            }
            Self::Quadratic => {
                let [c0, c1, c2] = DEW_SEED_QUADRATIC;
                c0 + alpha * (c1 + alpha * c2)
            }
        }
    }

    /// Pick the regime from the cubic estimate and return it with the seed
    ///
    /// The cubic is always evaluated first. A negative result means the dew
    /// point is likely below freezing, and the quadratic replaces it.
    pub fn seed(alpha: f64, vapor_kpa: f64) -> (Self, f64) {
        let cubic = Self::Cubic.evaluate(alpha, vapor_kpa);
        if cubic < 0.0 {
            (Self::Quadratic, Self::Quadratic.evaluate(alpha, vapor_kpa))
        } else {
            (Self::Cubic, cubic)
        }
    }
}
