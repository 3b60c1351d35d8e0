//! Sensor sample screening
//!
//! The acquisition loop polls two one-wire probes. A probe that drops off
//! the bus reports [`DEVICE_DISCONNECTED_C`] instead of failing, and that
//! value must never reach the formulas. [`screen`] is the filter the
//! acquisition side runs before calling the engine.

use core::fmt;

use crate::{
    constants::sensors::DEVICE_DISCONNECTED_C,
    errors::{PsychroError, PsychroResult},
    validation::Validatable,
};

/// Which thermometer a value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bulb {
    /// Plain thermometer in free air
    Dry,
    /// Thermometer under a wetted wick
    Wet,
}

impl Bulb {
    /// Lower-case label used in messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dry => "dry-bulb",
            Self::Wet => "wet-bulb",
        }
    }
}

impl fmt::Display for Bulb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A screened dry/wet pair, ready for the engine
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsychrometerReading {
    /// Dry-bulb temperature (°C)
    pub dry_bulb_c: f64,
    /// Wet-bulb temperature (°C)
    pub wet_bulb_c: f64,
}

impl PsychrometerReading {
    /// Wet-bulb depression (°C), negative when the probes are swapped or drifting
    pub fn depression_c(&self) -> f64 {
        self.dry_bulb_c - self.wet_bulb_c
    }
}

/// Reject disconnected or non-finite probe values
///
/// Raw DS18B20 readings arrive as `f32`; they are widened here. The dry bulb
/// is checked first.
pub fn screen(dry_bulb_raw: f32, wet_bulb_raw: f32) -> PsychroResult<PsychrometerReading> {
    let dry_bulb_c = screen_one(Bulb::Dry, dry_bulb_raw)?;
    let wet_bulb_c = screen_one(Bulb::Wet, wet_bulb_raw)?;
    Ok(PsychrometerReading { dry_bulb_c, wet_bulb_c })
}

fn screen_one(bulb: Bulb, raw: f32) -> PsychroResult<f64> {
    let value = f64::from(raw);
    if !raw.is_valid() {
        return Err(PsychroError::InvalidInput { value, reason: bulb.name() });
    }
    if value == DEVICE_DISCONNECTED_C {
        return Err(PsychroError::SensorDisconnected { bulb });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_normal_pair() {
        let reading = screen(25.0, 18.0).unwrap();
        assert_eq!(reading.dry_bulb_c, 25.0);
        assert_eq!(reading.wet_bulb_c, 18.0);
        assert_eq!(reading.depression_c(), 7.0);
    }

    #[test]
    fn sentinel_names_the_probe() {
        assert_eq!(
            screen(-127.0, 18.0),
            Err(PsychroError::SensorDisconnected { bulb: Bulb::Dry })
        );
        assert_eq!(
            screen(25.0, -127.0),
            Err(PsychroError::SensorDisconnected { bulb: Bulb::Wet })
        );
    }

    #[test]
    fn nan_is_invalid() {
        let result = screen(25.0, f32::NAN);
        assert!(matches!(result, Err(PsychroError::InvalidInput { reason: "wet-bulb", .. })));
    }

    #[test]
    fn infinite_dry_bulb_is_invalid() {
        let result = screen(f32::NEG_INFINITY, 18.0);
        assert!(matches!(
            result,
            Err(PsychroError::InvalidInput { value, reason: "dry-bulb" }) if value == f64::NEG_INFINITY
        ));
    }

    #[test]
    fn near_sentinel_is_not_disconnected() {
        // Out of range for the engine, but a real number from the probe
        assert!(screen(-126.9375, 18.0).is_ok());
    }
}
