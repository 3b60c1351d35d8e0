//! Physical Constants for Moist-Air Calculations
//!
//! Values follow the ASHRAE Handbook - Fundamentals psychrometric chapter.
//! Temperatures are in °C unless the name says otherwise; pressures in Pa.

// ===== STANDARD ATMOSPHERE =====

/// Standard atmospheric pressure at sea level (Pa).
///
/// Default total pressure of the moist-air mixture. Also the reference
/// pressure in the enhancement-factor correlation.
///
/// Source: International Standard Atmosphere (ISA)
pub const STANDARD_ATMOSPHERE_PA: f64 = 101_325.0;

/// Offset between Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Ratio of molar masses of water vapor and dry air (18.01528 / 28.9645).
///
/// Converts a vapor/dry-air partial pressure ratio into a mass ratio.
pub const MOLAR_MASS_RATIO: f64 = 0.62198;

/// Specific gas constant of dry air (kJ/kg·K).
pub const DRY_AIR_GAS_CONSTANT_KJ_PER_KG_K: f64 = 0.287055;

/// Inverse molar-mass ratio (28.9645 / 18.01528), used for specific volume.
pub const VAPOR_VOLUME_FACTOR: f64 = 1.6078;

// ===== ENERGY BALANCE =====

/// Specific heat of dry air at constant pressure (kJ/kg·K).
pub const DRY_AIR_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 1.006;

/// Specific heat of water vapor at constant pressure (kJ/kg·K).
pub const VAPOR_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 1.805;

/// Latent heat of vaporization of water at 0 °C (kJ/kg).
pub const LATENT_HEAT_VAPORIZATION_KJ_PER_KG: f64 = 2501.0;

/// Latent heat of fusion of ice at 0 °C (kJ/kg).
pub const LATENT_HEAT_FUSION_KJ_PER_KG: f64 = 334.0;

/// Specific heat of liquid water (kJ/kg·K).
pub const LIQUID_WATER_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 4.186;

/// Specific heat of ice (kJ/kg·K).
pub const ICE_SPECIFIC_HEAT_KJ_PER_KG_K: f64 = 2.093;

/// Wet-bulb latent-heat slope above freezing (kJ/kg·K).
///
/// Combined `c_w - c_pv` term applied to the wet-bulb temperature in the
/// liquid-water energy balance.
pub const WET_BULB_LATENT_SLOPE_KJ_PER_KG_K: f64 = 2.381;

// ===== ENHANCEMENT FACTOR =====

/// Pressure-proportional term of the enhancement factor.
pub const ENHANCEMENT_PRESSURE_TERM: f64 = 0.004;

/// Temperature slope inside the squared enhancement term (1/°C).
pub const ENHANCEMENT_TEMP_SLOPE: f64 = 0.0008;

/// Constant inside the squared enhancement term.
pub const ENHANCEMENT_TEMP_OFFSET: f64 = 0.004;

// ===== SATURATION PRESSURE CORRELATION =====
//
// ln(p_ws) = C1/T + C2 + C3·T + C4·T² + C5·T³ + C6·T⁴ + C7·ln(T), T in K.

/// Hyland-Wexler coefficients over liquid water (T ≥ 0 °C).
///
/// Valid 0 °C to 200 °C. `C6` is zero for this regime.
pub const SATURATION_OVER_WATER: [f64; 7] = [
    -5800.2206,
    1.3914993,
    -0.048640239,
    0.000041764768,
    -0.000000014452093,
    0.0,
    6.5459673,
];

/// Hyland-Wexler coefficients over ice (T < 0 °C).
///
/// Valid -100 °C to 0 °C.
pub const SATURATION_OVER_ICE: [f64; 7] = [
    -5674.5359,
    6.3925247,
    -0.009677843,
    0.00000062215701,
    2.0747825E-09,
    -9.484024E-13,
    4.1635019,
];

// ===== DEW POINT SEED =====
//
// Direct inverse of the saturation curve, α = ln(p_w / 1000) with p_w in Pa.

/// Cubic seed coefficients `[C0, C1, C2, C3, C4]` for
/// `C0 + C1·α + C2·α² + C3·α³ + C4·(p_w/1000)^0.1984`.
pub const DEW_SEED_CUBIC: [f64; 5] = [6.54, 14.526, 0.7389, 0.09486, 0.4569];

/// Exponent on the kPa vapor pressure in the cubic seed.
pub const DEW_SEED_CUBIC_EXPONENT: f64 = 0.1984;

/// Quadratic seed coefficients `[C0, C1, C2]`, used when the cubic seed is
/// below zero.
pub const DEW_SEED_QUADRATIC: [f64; 3] = [6.09, 12.608, 0.4959];

/// Pa per kPa, the seed polynomials work in kPa.
pub const PA_PER_KPA: f64 = 1000.0;
