//! Constants for the psychrometric engine
//!
//! Every numeric value the formulas depend on lives here, with its unit in
//! the name. The engine itself never reads these at call time: they seed
//! [`EngineConfig::default`](crate::config::EngineConfig) and the regime
//! coefficient tables, and anything a deployment may want to vary (pressure,
//! tolerance, iteration cap) is carried on the configuration value instead.
//!
//! ## Organization
//!
//! - **Physics**: saturation correlation coefficients, gas constants, standard atmosphere
//! - **Solver**: dew-point bisection tolerance, caps and bracket sizing
//! - **Sensors**: what the acquisition side can hand us and what it must filter

/// Physical constants and empirical correlation coefficients.
pub mod physics;

/// Dew-point solver tolerances and limits.
pub mod solver;

/// Sensor sentinels and plausible input range.
pub mod sensors;

// Re-export commonly used constants for convenience
pub use physics::{
    STANDARD_ATMOSPHERE_PA, KELVIN_OFFSET, MOLAR_MASS_RATIO,
};

pub use solver::{
    CONVERGENCE_EPSILON, DEFAULT_MAX_ITERATIONS, SEED_HALF_WIDTH_C,
};

pub use sensors::{
    DEVICE_DISCONNECTED_C, SENSOR_MIN_C, SENSOR_MAX_C,
};
