//! Error Types for Psychrometric Derivation Failures
//!
//! ## Design Philosophy
//!
//! Errors are returned once per sampling cycle and may be queued by the
//! caller, so they are kept small and `Copy`: no `String`, only
//! `&'static str` for context. Every variant carries enough information to
//! decide between retrying the cycle, logging, or reporting the reading as
//! unavailable.
//!
//! ## Error Categories
//!
//! ### Invalid Input
//! - `InvalidInput`: NaN, infinity, a configuration value with no physical meaning,
//!   or a wet-bulb depression too large to leave any water vapor
//! - `OutOfRange`: finite temperature outside the plausible sensor range
//! - `SensorDisconnected`: a probe returned its "no device" sentinel
//!
//! ### Numeric Singularity
//! - `NumericSingularity`: a denominator in the state or output formulas vanished
//!
//! ### Convergence Failure
//! - `ConvergenceFailure`: the dew-point bisection hit its cap or met a non-finite value
//!
//! Out-of-range *results* are not errors. Relative humidity above 1.0 or
//! below zero is returned as computed, since clamping would hide sensor drift.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use psychro_core::{ErrorKind, Psychrometer};
//!
//! let engine = Psychrometer::default();
//! match engine.derive(25.0, 18.0) {
//!     Ok(state) => {
//!         // send_downstream(state);
//!         let _ = state.relative_humidity;
//!     }
//!     Err(e) => match e.kind() {
//!         ErrorKind::InvalidInput => {
//!             // Probe unplugged or faulty - skip this cycle
//!         }
//!         ErrorKind::NumericSingularity => {
//!             // Readings inconsistent with humid air - mark unavailable
//!         }
//!         ErrorKind::ConvergenceFailure => {
//!             // Retry with a wider seed bracket or report unusable
//!         }
//!     },
//! }
//! ```

use thiserror_no_std::Error;

use crate::reading::Bulb;

/// Result type for psychrometric operations
pub type PsychroResult<T> = Result<T, PsychroError>;

/// Failures raised by the engine - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum PsychroError {
    /// Value makes no physical sense (NaN, infinity, non-positive pressure)
    #[error("Invalid input {value}: {reason}")]
    InvalidInput {
        /// The offending value
        value: f64,
        /// Which input was rejected and why
        reason: &'static str,
    },

    /// Temperature outside the plausible sensor range
    #[error("Temperature {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The temperature that failed the range check (°C)
        value: f64,
        /// Lowest accepted temperature (°C)
        min: f64,
        /// Highest accepted temperature (°C)
        max: f64,
    },

    /// A probe reported the one-wire "disconnected" sentinel
    #[error("{bulb} sensor disconnected")]
    SensorDisconnected {
        /// Which probe dropped out
        bulb: Bulb,
    },

    /// A formula denominator vanished or a quotient was not finite
    #[error("Numeric singularity in {stage} (denominator {denominator})")]
    NumericSingularity {
        /// Formula that failed
        stage: &'static str,
        /// Denominator value at the failure point
        denominator: f64,
    },

    /// Dew-point bisection did not meet the pressure tolerance
    #[error("Dew point did not converge after {iterations} iterations (last estimate {estimate})")]
    ConvergenceFailure {
        /// Bisection steps taken across all bracket attempts
        iterations: u32,
        /// Last midpoint evaluated, NaN if the seed itself was not finite (°C)
        estimate: f64,
    },
}

/// The three failure categories callers branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reject the reading, the inputs are unusable
    InvalidInput,
    /// Inputs are finite but inconsistent with humid air
    NumericSingularity,
    /// The dew-point solver gave up
    ConvergenceFailure,
}

impl PsychroError {
    /// Category of this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. }
            | Self::OutOfRange { .. }
            | Self::SensorDisconnected { .. } => ErrorKind::InvalidInput,
            Self::NumericSingularity { .. } => ErrorKind::NumericSingularity,
            Self::ConvergenceFailure { .. } => ErrorKind::ConvergenceFailure,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PsychroError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidInput { value, reason } =>
                defmt::write!(fmt, "Invalid input {}: {}", value, reason),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "Temperature {} outside [{}, {}]", value, min, max),
            Self::SensorDisconnected { bulb } =>
                defmt::write!(fmt, "{} sensor disconnected", bulb.name()),
            Self::NumericSingularity { stage, denominator } =>
                defmt::write!(fmt, "Singularity in {} ({})", stage, denominator),
            Self::ConvergenceFailure { iterations, estimate } =>
                defmt::write!(fmt, "No convergence after {} steps ({})", iterations, estimate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_taxonomy() {
        let out_of_range = PsychroError::OutOfRange { value: -127.0, min: -50.0, max: 100.0 };
        assert_eq!(out_of_range.kind(), ErrorKind::InvalidInput);

        let unplugged = PsychroError::SensorDisconnected { bulb: Bulb::Wet };
        assert_eq!(unplugged.kind(), ErrorKind::InvalidInput);

        let singular = PsychroError::NumericSingularity { stage: "absolute humidity", denominator: 0.0 };
        assert_eq!(singular.kind(), ErrorKind::NumericSingularity);

        let stuck = PsychroError::ConvergenceFailure { iterations: 100, estimate: -40.0 };
        assert_eq!(stuck.kind(), ErrorKind::ConvergenceFailure);
    }

    #[cfg(feature = "std")]
    #[test]
    fn messages_name_the_failure() {
        let err = PsychroError::SensorDisconnected { bulb: Bulb::Dry };
        assert_eq!(err.to_string(), "dry-bulb sensor disconnected");

        let err = PsychroError::ConvergenceFailure { iterations: 7, estimate: 1.5 };
        assert!(err.to_string().contains("after 7 iterations"));
    }
}
