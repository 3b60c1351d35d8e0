//! Engine configuration
//!
//! An immutable value threaded into [`Psychrometer`](crate::Psychrometer)
//! and [`DewPointSolver`](crate::dewpoint::DewPointSolver). Defaults match
//! a sea-level psychrometer with DS18B20 probes; change the pressure for
//! altitude compensation without touching the formulas.
//!
//! ```rust
//! use psychro_core::EngineConfig;
//!
//! // Denver, ~1600 m
//! let config = EngineConfig::default()
//!     .with_atmospheric_pressure(83_500.0)
//!     .with_max_iterations(64);
//! assert!(config.validate().is_ok());
//! ```

use crate::{
    constants::{
        physics::STANDARD_ATMOSPHERE_PA,
        sensors::{SENSOR_MAX_C, SENSOR_MIN_C},
        solver::{CONVERGENCE_EPSILON, DEFAULT_BRACKET_WIDENINGS, DEFAULT_MAX_ITERATIONS, SEED_HALF_WIDTH_C},
    },
    errors::{PsychroError, PsychroResult},
};

/// Physical and numerical settings for one engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Total pressure of the moist air (Pa)
    pub atmospheric_pressure_pa: f64,
    /// Relative pressure tolerance for dew-point convergence
    pub convergence_epsilon: f64,
    /// Bisection steps allowed per bracket attempt
    pub max_iterations: u32,
    /// Initial bracket half-width around the dew-point seed (°C)
    pub seed_half_width_c: f64,
    /// Bracket doublings attempted before giving up
    pub bracket_widenings: u8,
    /// Lowest accepted input temperature (°C)
    pub min_temperature_c: f64,
    /// Highest accepted input temperature (°C)
    pub max_temperature_c: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            atmospheric_pressure_pa: STANDARD_ATMOSPHERE_PA,
            convergence_epsilon: CONVERGENCE_EPSILON,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed_half_width_c: SEED_HALF_WIDTH_C,
            bracket_widenings: DEFAULT_BRACKET_WIDENINGS,
            min_temperature_c: SENSOR_MIN_C,
            max_temperature_c: SENSOR_MAX_C,
        }
    }
}

impl EngineConfig {
    /// Set total pressure (Pa)
    pub fn with_atmospheric_pressure(mut self, pressure_pa: f64) -> Self {
        self.atmospheric_pressure_pa = pressure_pa;
        self
    }

    /// Set relative convergence tolerance
    pub fn with_convergence_epsilon(mut self, epsilon: f64) -> Self {
        self.convergence_epsilon = epsilon;
        self
    }

    /// Set per-attempt iteration cap
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set initial seed bracket half-width (°C)
    pub fn with_seed_half_width(mut self, half_width_c: f64) -> Self {
        self.seed_half_width_c = half_width_c;
        self
    }

    /// Set number of bracket doublings
    pub fn with_bracket_widenings(mut self, widenings: u8) -> Self {
        self.bracket_widenings = widenings;
        self
    }

    /// Set accepted input temperature range (°C), swapping inverted bounds
    pub fn with_temperature_range(mut self, min_c: f64, max_c: f64) -> Self {
        let (min_c, max_c) = if min_c > max_c { (max_c, min_c) } else { (min_c, max_c) };
        self.min_temperature_c = min_c;
        self.max_temperature_c = max_c;
        self
    }

    /// Reject settings the formulas cannot work with
    pub fn validate(&self) -> PsychroResult<()> {
        let pressure = self.atmospheric_pressure_pa;
        if !(pressure.is_finite() && pressure > 0.0) {
            return Err(PsychroError::InvalidInput {
                value: pressure,
                reason: "atmospheric pressure must be positive",
            });
        }

        let epsilon = self.convergence_epsilon;
        if !(epsilon.is_finite() && epsilon > 0.0) {
            return Err(PsychroError::InvalidInput {
                value: epsilon,
                reason: "convergence epsilon must be positive",
            });
        }

        if self.max_iterations == 0 {
            return Err(PsychroError::InvalidInput {
                value: 0.0,
                reason: "iteration cap must be at least one",
            });
        }

        let half_width = self.seed_half_width_c;
        if !(half_width.is_finite() && half_width > 0.0) {
            return Err(PsychroError::InvalidInput {
                value: half_width,
                reason: "seed bracket half-width must be positive",
            });
        }

        let (min, max) = (self.min_temperature_c, self.max_temperature_c);
        if !(min.is_finite() && max.is_finite()) || min > max {
            return Err(PsychroError::InvalidInput {
                value: min,
                reason: "temperature range must be finite and ordered",
            });
        }

        Ok(())
    }
}
