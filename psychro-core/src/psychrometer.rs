//! Psychrometer engine
//!
//! Entry points that take the two raw temperatures, validate them, and run
//! the layers bottom-up:
//!
//! ```text
//! (t_db, t_wb) ─▶ p_ws, f          saturation
//!              ─▶ H_db, H_wb, W'   state
//!              ─▶ RH, p_w, v, h    output
//!              ─▶ t_dp             dew-point solver
//! ```
//!
//! Every call is a pure function of its arguments and the engine's
//! [`EngineConfig`]. Nothing is cached between calls, so identical inputs
//! give bit-identical outputs and the engine can be shared freely.

use crate::{
    config::EngineConfig,
    dewpoint::{DewPointSolution, DewPointSolver},
    errors::{PsychroError, PsychroResult},
    output,
    reading::PsychrometerReading,
    saturation::{enhancement_factor, saturated_vapor_pressure},
    state::{absolute_humidity, saturated_absolute_humidity},
    validation::{check_finite, check_range},
};

/// All properties derived from one dry/wet pair
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsychrometricState {
    /// Dry-bulb input (°C)
    pub dry_bulb_c: f64,
    /// Wet-bulb input (°C)
    pub wet_bulb_c: f64,
    /// Relative humidity as a fraction, not clamped
    pub relative_humidity: f64,
    /// Dew-point temperature (°C)
    pub dew_point_c: f64,
    /// Humidity ratio (kg water / kg dry air)
    pub absolute_humidity: f64,
    /// Water vapor partial pressure (Pa)
    pub partial_pressure_pa: f64,
    /// Specific volume (m³ / kg dry air)
    pub specific_volume_m3_per_kg: f64,
    /// Specific enthalpy (kJ / kg dry air)
    pub enthalpy_kj_per_kg: f64,
}

/// Saturation state at one bulb
#[derive(Debug, Clone, Copy, PartialEq)]
struct BulbSaturation {
    pressure_pa: f64,
    enhancement: f64,
    humidity_ratio: f64,
}

/// Psychrometric calculation engine
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Psychrometer {
    config: EngineConfig,
    solver: DewPointSolver,
}

impl Psychrometer {
    /// Engine with a validated configuration
    pub fn new(config: EngineConfig) -> PsychroResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            solver: DewPointSolver::new(&config),
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Derive every property from one pair of temperatures
    ///
    /// Relative humidity above 1 is returned as is. Below 0 there is no dew
    /// point, so the call fails with `InvalidInput` carrying the relative
    /// humidity as its value.
    pub fn derive(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<PsychrometricState> {
        let (dry_bulb_c, wet_bulb_c) = self.check_pair(dry_bulb_c, wet_bulb_c)?;
        let atm = self.config.atmospheric_pressure_pa;

        let dry = self.saturation_at(dry_bulb_c)?;
        let wet = self.saturation_at(wet_bulb_c)?;
        let humidity_ratio = absolute_humidity(dry_bulb_c, wet_bulb_c, wet.humidity_ratio)?;

        let relative_humidity = output::relative_humidity(
            dry.humidity_ratio,
            humidity_ratio,
            dry.enhancement,
            dry.pressure_pa,
            atm,
        )?;
        if !(0.0..=1.0).contains(&relative_humidity) {
            log_warn!(
                "Relative humidity {:.4} outside [0, 1] for dry {} °C / wet {} °C",
                relative_humidity, dry_bulb_c, wet_bulb_c
            );
        }

        let partial_pressure_pa = output::partial_pressure(atm, humidity_ratio, wet.enhancement)?;
        // A depression too large for the dry bulb leaves no vapor to condense
        if partial_pressure_pa <= 0.0 {
            return Err(PsychroError::InvalidInput {
                value: relative_humidity,
                reason: "relative humidity below zero, wet-bulb depression too large",
            });
        }
        let dew = self.solver.solve(atm, partial_pressure_pa)?;

        Ok(PsychrometricState {
            dry_bulb_c,
            wet_bulb_c,
            relative_humidity,
            dew_point_c: dew.dew_point_c,
            absolute_humidity: humidity_ratio,
            partial_pressure_pa,
            specific_volume_m3_per_kg: output::specific_volume(dry_bulb_c, humidity_ratio, atm)?,
            enthalpy_kj_per_kg: output::enthalpy(dry_bulb_c, humidity_ratio),
        })
    }

    /// Derive every property from a screened reading
    pub fn derive_reading(&self, reading: &PsychrometerReading) -> PsychroResult<PsychrometricState> {
        self.derive(reading.dry_bulb_c, reading.wet_bulb_c)
    }

    /// Humidity ratio (kg water / kg dry air)
    pub fn absolute_humidity(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<f64> {
        let (dry_bulb_c, wet_bulb_c) = self.check_pair(dry_bulb_c, wet_bulb_c)?;
        let wet = self.saturation_at(wet_bulb_c)?;
        absolute_humidity(dry_bulb_c, wet_bulb_c, wet.humidity_ratio)
    }

    /// Relative humidity as a fraction, not clamped
    pub fn relative_humidity(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<f64> {
        let (dry_bulb_c, wet_bulb_c) = self.check_pair(dry_bulb_c, wet_bulb_c)?;
        let dry = self.saturation_at(dry_bulb_c)?;
        let wet = self.saturation_at(wet_bulb_c)?;
        let humidity_ratio = absolute_humidity(dry_bulb_c, wet_bulb_c, wet.humidity_ratio)?;
        output::relative_humidity(
            dry.humidity_ratio,
            humidity_ratio,
            dry.enhancement,
            dry.pressure_pa,
            self.config.atmospheric_pressure_pa,
        )
    }

    /// Water vapor partial pressure (Pa)
    pub fn partial_pressure(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<f64> {
        let (dry_bulb_c, wet_bulb_c) = self.check_pair(dry_bulb_c, wet_bulb_c)?;
        self.vapor_pressure(dry_bulb_c, wet_bulb_c)
    }

    /// Dew-point temperature (°C)
    pub fn dew_point(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<f64> {
        self.dew_point_solution(dry_bulb_c, wet_bulb_c)
            .map(|solution| solution.dew_point_c)
    }

    /// Dew point with solver diagnostics
    pub fn dew_point_solution(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<DewPointSolution> {
        let (dry_bulb_c, wet_bulb_c) = self.check_pair(dry_bulb_c, wet_bulb_c)?;
        let vapor_pressure = self.vapor_pressure(dry_bulb_c, wet_bulb_c)?;
        self.solver.solve(self.config.atmospheric_pressure_pa, vapor_pressure)
    }

    /// Specific volume (m³ / kg dry air) for a known humidity ratio
    pub fn specific_volume(&self, dry_bulb_c: f64, humidity_ratio: f64) -> PsychroResult<f64> {
        let dry_bulb_c = self.check_temperature(dry_bulb_c, "dry bulb")?;
        let humidity_ratio = check_finite(humidity_ratio, "absolute humidity")?;
        output::specific_volume(dry_bulb_c, humidity_ratio, self.config.atmospheric_pressure_pa)
    }

    /// Specific enthalpy (kJ / kg dry air) for a known humidity ratio
    pub fn enthalpy(&self, dry_bulb_c: f64, humidity_ratio: f64) -> PsychroResult<f64> {
        let dry_bulb_c = self.check_temperature(dry_bulb_c, "dry bulb")?;
        let humidity_ratio = check_finite(humidity_ratio, "absolute humidity")?;
        Ok(output::enthalpy(dry_bulb_c, humidity_ratio))
    }

    fn vapor_pressure(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<f64> {
        let wet = self.saturation_at(wet_bulb_c)?;
        let humidity_ratio = absolute_humidity(dry_bulb_c, wet_bulb_c, wet.humidity_ratio)?;
        output::partial_pressure(self.config.atmospheric_pressure_pa, humidity_ratio, wet.enhancement)
    }

    fn saturation_at(&self, temp_c: f64) -> PsychroResult<BulbSaturation> {
        let atm = self.config.atmospheric_pressure_pa;
        let pressure_pa = saturated_vapor_pressure(temp_c);
        let enhancement = enhancement_factor(atm, temp_c);
        let humidity_ratio = saturated_absolute_humidity(enhancement, pressure_pa, atm)?;
        Ok(BulbSaturation { pressure_pa, enhancement, humidity_ratio })
    }

    fn check_pair(&self, dry_bulb_c: f64, wet_bulb_c: f64) -> PsychroResult<(f64, f64)> {
        let dry_bulb_c = self.check_temperature(dry_bulb_c, "dry bulb")?;
        let wet_bulb_c = self.check_temperature(wet_bulb_c, "wet bulb")?;
        if wet_bulb_c > dry_bulb_c {
            log_warn!(
                "Wet bulb {} °C above dry bulb {} °C, results will read supersaturated",
                wet_bulb_c, dry_bulb_c
            );
        }
        Ok((dry_bulb_c, wet_bulb_c))
    }

    fn check_temperature(&self, temp_c: f64, reason: &'static str) -> PsychroResult<f64> {
        let temp_c = check_finite(temp_c, reason)?;
        check_range(temp_c, self.config.min_temperature_c, self.config.max_temperature_c)
    }
}
