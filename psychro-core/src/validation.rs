//! Input and denominator guards
//!
//! Small pure helpers shared by every layer so that each formula rejects
//! bad values the same way. Nothing here allocates or panics.

use crate::errors::{PsychroError, PsychroResult};

/// Trait for values that can be validated
pub trait Validatable {
    /// Check if the value is physically usable (not NaN, infinite, etc)
    fn is_valid(&self) -> bool;
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

/// Reject NaN and infinity, naming the input in the error
pub fn check_finite(value: f64, reason: &'static str) -> PsychroResult<f64> {
    if value.is_valid() {
        Ok(value)
    } else {
        Err(PsychroError::InvalidInput { value, reason })
    }
}

/// Check if a temperature is within the accepted range
pub fn check_range(value: f64, min: f64, max: f64) -> PsychroResult<f64> {
    if value < min || value > max {
        Err(PsychroError::OutOfRange { value, min, max })
    } else {
        Ok(value)
    }
}

/// Fail with `NumericSingularity` when `denominator` is effectively zero
pub fn check_denominator(denominator: f64, stage: &'static str) -> PsychroResult<f64> {
    if !denominator.is_valid()
        || libm::fabs(denominator) <= crate::constants::solver::SINGULARITY_THRESHOLD
    {
        Err(PsychroError::NumericSingularity { stage, denominator })
    } else {
        Ok(denominator)
    }
}

/// Fail with `NumericSingularity` unless `denominator` is clearly positive
///
/// For formulas that diverge as the denominator approaches zero from above
/// and have no physical meaning past it.
pub fn check_positive_denominator(denominator: f64, stage: &'static str) -> PsychroResult<f64> {
    if denominator.is_valid() && denominator > crate::constants::solver::SINGULARITY_THRESHOLD {
        Ok(denominator)
    } else {
        Err(PsychroError::NumericSingularity { stage, denominator })
    }
}

/// Divide with a guarded denominator and a finite quotient
pub fn guarded_div(numerator: f64, denominator: f64, stage: &'static str) -> PsychroResult<f64> {
    let denominator = check_denominator(denominator, stage)?;
    let quotient = numerator / denominator;
    if quotient.is_valid() {
        Ok(quotient)
    } else {
        Err(PsychroError::NumericSingularity { stage, denominator })
    }
}
