//! Psychrometric engine for dry/wet bulb psychrometers
//!
//! Derives relative humidity, dew point, humidity ratio, vapor partial
//! pressure, specific volume and enthalpy from two temperatures. Designed
//! for monitoring nodes that only carry two thermometers.
//!
//! Key constraints:
//! - Pure functions, no shared mutable state, no I/O
//! - No heap allocation, `no_std` capable
//! - Every loop has a hard iteration bound
//!
//! ```no_run
//! use psychro_core::{Psychrometer, reading};
//!
//! let engine = Psychrometer::default();
//!
//! // Raw probe values from the acquisition loop
//! let sample = reading::screen(25.0, 18.0)?;
//! let state = engine.derive_reading(&sample)?;
//!
//! assert!(state.dew_point_c <= state.dry_bulb_c);
//! # Ok::<(), psychro_core::PsychroError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod config;
pub mod constants;
pub mod dewpoint;
pub mod errors;
pub mod output;
pub mod psychrometer;
pub mod reading;
pub mod regime;
pub mod saturation;
pub mod state;
pub mod validation;

// Public API
pub use config::EngineConfig;
pub use dewpoint::{find_dew_point, DewPointSolution, DewPointSolver, SolverState};
pub use errors::{ErrorKind, PsychroError, PsychroResult};
pub use psychrometer::{Psychrometer, PsychrometricState};
pub use reading::{Bulb, PsychrometerReading};
pub use saturation::{enhancement_factor, saturated_vapor_pressure};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
