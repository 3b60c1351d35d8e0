//! Dew-Point Solver Limits
//!
//! The bisection converges on the *pressure* residual, not the bracket
//! width, so these values are expressed relative to the target vapor
//! pressure.

/// Relative pressure tolerance for dew-point convergence.
///
/// Stop when `|p_ws(T) - p_w| / p_w <= ε`.
pub const CONVERGENCE_EPSILON: f64 = 5e-6;

/// Maximum bisection steps per bracket attempt.
///
/// A 0.4 °C bracket reaches f64 resolution after roughly 55 halvings, so
/// hitting this cap means the target is not inside the bracket.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Half-width of the initial bracket around the seed estimate (°C).
pub const SEED_HALF_WIDTH_C: f64 = 0.2;

/// Number of times the bracket half-width is doubled after a failed attempt.
///
/// Four doublings reach ±3.2 °C, enough to cover the seed error at -50 °C.
pub const DEFAULT_BRACKET_WIDENINGS: u8 = 4;

/// Denominators with magnitude at or below this are treated as singular.
pub const SINGULARITY_THRESHOLD: f64 = 1e-9;
