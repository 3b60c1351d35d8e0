//! Dew-Point Solver
//!
//! ## Algorithm
//!
//! The dew point is the temperature whose saturation pressure equals the
//! actual vapor pressure `p_w`. The saturation curve has no closed-form
//! inverse, so:
//!
//! 1. **Seed** from the empirical inverse in `α = ln(p_w / 1000)`
//!    (see [`SeedRegime`]).
//! 2. **Bracket** the seed with `[seed - 0.2, seed + 0.2]` °C.
//! 3. **Bisect**: evaluate `p_ws` at the midpoint, move the upper bound down
//!    if it is above the target, the lower bound up otherwise.
//! 4. **Stop** when the pressure residual is small *relative to the target*:
//!    `|p_ws(mid) - p_w| / p_w ≤ ε`.
//!
//! ## Termination
//!
//! The solver is an explicit state machine:
//!
//! ```text
//! Seeding ──▶ Iterating ──▶ Converged
//!    │            │
//!    └──────────▶ Failed ◀── iteration cap / non-finite value
//! ```
//!
//! Every `Iterating` step consumes one unit of a finite budget
//! (`max_iterations` per attempt, `bracket_widenings + 1` attempts), so
//! [`DewPointSolver::solve`] always returns. If the root is not inside the
//! bracket, bisection collapses onto a bound and hits the cap; the bracket
//! is then doubled around the same seed and the search restarts.
//!
//! Targets between the ice and water curves at 0 °C (611.154 Pa to
//! 611.213 Pa) have no solution at all and always end in `Failed`.

use crate::{
    config::EngineConfig,
    constants::physics::PA_PER_KPA,
    errors::{PsychroError, PsychroResult},
    regime::SeedRegime,
    saturation::saturated_vapor_pressure,
};

/// Bisection interval and bookkeeping for one attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Seed estimate the bracket is centred on (°C)
    pub seed_c: f64,
    /// Current half-width around the seed (°C)
    pub half_width_c: f64,
    /// Lower bound (°C)
    pub lower_c: f64,
    /// Upper bound (°C)
    pub upper_c: f64,
    /// Steps taken in this attempt
    pub iteration: u32,
    /// Steps taken across all attempts
    pub total_iterations: u32,
    /// Zero-based attempt index, incremented on each widening
    pub attempt: u8,
}

impl Bracket {
    fn around(seed_c: f64, half_width_c: f64, total_iterations: u32, attempt: u8) -> Self {
        Self {
            seed_c,
            half_width_c,
            lower_c: seed_c - half_width_c,
            upper_c: seed_c + half_width_c,
            iteration: 0,
            total_iterations,
            attempt,
        }
    }
}

/// Converged dew point with solver diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DewPointSolution {
    /// Dew-point temperature (°C)
    pub dew_point_c: f64,
    /// Bisection steps across all attempts
    pub iterations: u32,
    /// Bracket half-width of the successful attempt (°C)
    pub half_width_c: f64,
    /// Polynomial that produced the seed
    pub seed_regime: SeedRegime,
}

/// Solver state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverState {
    /// Nothing evaluated yet
    Seeding,
    /// Bisecting inside a bracket
    Iterating {
        /// Current interval
        bracket: Bracket,
        /// Polynomial the seed came from
        seed_regime: SeedRegime,
    },
    /// Residual within tolerance
    Converged(DewPointSolution),
    /// Gave up
    Failed(PsychroError),
}

impl SolverState {
    /// True for `Converged` and `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Converged(_) | Self::Failed(_))
    }
}

/// Bisection dew-point solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointSolver {
    epsilon: f64,
    max_iterations: u32,
    seed_half_width_c: f64,
    bracket_widenings: u8,
}

impl Default for DewPointSolver {
    fn default() -> Self {
        Self::new(&EngineConfig::default())
    }
}

impl DewPointSolver {
    /// Solver using the tolerance and limits from `config`
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            epsilon: config.convergence_epsilon,
            max_iterations: config.max_iterations,
            seed_half_width_c: config.seed_half_width_c,
            bracket_widenings: config.bracket_widenings,
        }
    }

    /// Dew point (°C) for vapor pressure `vapor_pressure_pa` in air at
    /// total pressure `atm_pressure_pa`
    pub fn solve(&self, atm_pressure_pa: f64, vapor_pressure_pa: f64) -> PsychroResult<DewPointSolution> {
        let mut state = SolverState::Seeding;
        loop {
            state = match state {
                SolverState::Converged(solution) => {
                    log_debug!(
                        "Dew point {:.4} °C after {} steps (±{} °C bracket)",
                        solution.dew_point_c, solution.iterations, solution.half_width_c
                    );
                    return Ok(solution);
                }
                SolverState::Failed(err) => return Err(err),
                pending => self.step(pending, atm_pressure_pa, vapor_pressure_pa),
            };
        }
    }

    /// Advance the state machine by one transition
    ///
    /// Terminal states are returned unchanged.
    pub fn step(&self, state: SolverState, atm_pressure_pa: f64, target_pa: f64) -> SolverState {
        match state {
            SolverState::Seeding => self.seed(atm_pressure_pa, target_pa),
            SolverState::Iterating { bracket, seed_regime } => {
                self.bisect(bracket, seed_regime, target_pa)
            }
            terminal => terminal,
        }
    }

    fn seed(&self, atm_pressure_pa: f64, target_pa: f64) -> SolverState {
        // Vapor cannot exceed the mixture pressure, and ln() needs a positive target
        if !(target_pa > 0.0 && target_pa < atm_pressure_pa) {
            return SolverState::Failed(PsychroError::ConvergenceFailure {
                iterations: 0,
                estimate: f64::NAN,
            });
        }

        let vapor_kpa = target_pa / PA_PER_KPA;
        let (seed_regime, seed_c) = SeedRegime::seed(libm::log(vapor_kpa), vapor_kpa);
        if !seed_c.is_finite() {
            return SolverState::Failed(PsychroError::ConvergenceFailure {
                iterations: 0,
                estimate: seed_c,
            });
        }

        SolverState::Iterating {
            bracket: Bracket::around(seed_c, self.seed_half_width_c, 0, 0),
            seed_regime,
        }
    }

    fn bisect(&self, bracket: Bracket, seed_regime: SeedRegime, target_pa: f64) -> SolverState {
        let mid = (bracket.lower_c + bracket.upper_c) / 2.0;
        let pressure = saturated_vapor_pressure(mid);
        let total_iterations = bracket.total_iterations.saturating_add(1);

        if !mid.is_finite() || !pressure.is_finite() {
            return SolverState::Failed(PsychroError::ConvergenceFailure {
                iterations: total_iterations,
                estimate: mid,
            });
        }

        let (lower_c, upper_c) = if pressure > target_pa {
            (bracket.lower_c, mid)
        } else {
            (mid, bracket.upper_c)
        };

        log_trace!(
            "Dew bisection #{}: [{:.6}, {:.6}] p_ws={:.4} target={:.4}",
            total_iterations, lower_c, upper_c, pressure, target_pa
        );

        if libm::fabs(pressure - target_pa) / target_pa <= self.epsilon {
            return SolverState::Converged(DewPointSolution {
                dew_point_c: mid,
                iterations: total_iterations,
                half_width_c: bracket.half_width_c,
                seed_regime,
            });
        }

        let iteration = bracket.iteration + 1;
        if iteration < self.max_iterations {
            return SolverState::Iterating {
                bracket: Bracket { lower_c, upper_c, iteration, total_iterations, ..bracket },
                seed_regime,
            };
        }

        if bracket.attempt < self.bracket_widenings {
            let half_width_c = bracket.half_width_c * 2.0;
            log_warn!(
                "Dew point not bracketed by ±{} °C around {:.3} °C, widening to ±{} °C",
                bracket.half_width_c, bracket.seed_c, half_width_c
            );
            return SolverState::Iterating {
                bracket: Bracket::around(bracket.seed_c, half_width_c, total_iterations, bracket.attempt + 1),
                seed_regime,
            };
        }

        SolverState::Failed(PsychroError::ConvergenceFailure {
            iterations: total_iterations,
            estimate: mid,
        })
    }
}

/// Dew point (°C) with the default solver settings
pub fn find_dew_point(atm_pressure_pa: f64, vapor_pressure_pa: f64) -> PsychroResult<f64> {
    DewPointSolver::default()
        .solve(atm_pressure_pa, vapor_pressure_pa)
        .map(|solution| solution.dew_point_c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::solver::CONVERGENCE_EPSILON;

    const P: f64 = 101_325.0;

    #[test]
    fn recovers_temperature_from_saturation_pressure() {
        for t in [-20.0, -5.0, 0.5, 14.0, 25.0, 60.0, 95.0] {
            let dew = find_dew_point(P, saturated_vapor_pressure(t)).unwrap();
            assert!((dew - t).abs() < 1e-3, "t = {t}, dew = {dew}");
        }
    }

    #[test]
    fn converged_pressure_within_tolerance() {
        let target = 1608.1766;
        let solution = DewPointSolver::default().solve(P, target).unwrap();
        let residual = (saturated_vapor_pressure(solution.dew_point_c) - target).abs() / target;
        assert!(residual <= CONVERGENCE_EPSILON);
        assert_eq!(solution.seed_regime, SeedRegime::Cubic);
        assert_eq!(solution.half_width_c, 0.2);
        assert!((solution.dew_point_c - 14.0914).abs() < 1e-3);
    }

    #[test]
    fn cold_targets_need_wider_bracket() {
        // Seed error at -45 °C is about 1 °C, outside the ±0.2 bracket
        let target = saturated_vapor_pressure(-45.0);

        let narrow = EngineConfig::default().with_bracket_widenings(0);
        let result = DewPointSolver::new(&narrow).solve(P, target);
        assert!(matches!(result, Err(PsychroError::ConvergenceFailure { iterations: 100, .. })));

        let solution = DewPointSolver::default().solve(P, target).unwrap();
        assert!(solution.half_width_c > 0.2);
        assert_eq!(solution.seed_regime, SeedRegime::Quadratic);
        assert!((solution.dew_point_c + 45.0).abs() < 1e-3);
    }

    #[test]
    fn freezing_gap_fails_instead_of_hanging() {
        // Between the ice curve at 0⁻ and the water curve at 0⁺
        let result = DewPointSolver::default().solve(P, 611.18);
        match result {
            Err(PsychroError::ConvergenceFailure { iterations, estimate }) => {
                assert_eq!(iterations, 500);
                assert!(estimate.abs() < 1e-6);
            }
            other => panic!("expected convergence failure, got {other:?}"),
        }
    }

    #[test]
    fn degenerate_targets_fail_at_seeding() {
        for target in [0.0, -73.7, f64::NAN, f64::INFINITY, P] {
            let result = DewPointSolver::default().solve(P, target);
            assert!(
                matches!(result, Err(PsychroError::ConvergenceFailure { iterations: 0, .. })),
                "target {target}"
            );
        }
    }

    #[test]
    fn terminal_states_do_not_advance() {
        let solver = DewPointSolver::default();
        let failed = SolverState::Failed(PsychroError::ConvergenceFailure { iterations: 3, estimate: 1.0 });
        assert_eq!(solver.step(failed, P, 1000.0), failed);
        assert!(failed.is_terminal());
        assert!(!SolverState::Seeding.is_terminal());
    }

    #[test]
    fn overflowing_bracket_fails_mid_bisection() {
        // Midpoints run off toward 1e308 °C where the saturation curve overflows
        let config = EngineConfig::default()
            .with_seed_half_width(1e308)
            .with_bracket_widenings(1);
        match DewPointSolver::new(&config).solve(P, 1608.0) {
            Err(PsychroError::ConvergenceFailure { iterations, estimate }) => {
                assert!(iterations > 0);
                assert!(!estimate.is_finite());
            }
            other => panic!("expected convergence failure, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_midpoint_is_terminal() {
        let bracket = Bracket {
            seed_c: 0.0,
            half_width_c: f64::INFINITY,
            lower_c: f64::NEG_INFINITY,
            upper_c: f64::INFINITY,
            iteration: 0,
            total_iterations: 7,
            attempt: 0,
        };
        let state = SolverState::Iterating { bracket, seed_regime: SeedRegime::Cubic };
        match DewPointSolver::default().step(state, P, 1608.0) {
            SolverState::Failed(PsychroError::ConvergenceFailure { iterations, estimate }) => {
                assert_eq!(iterations, 8);
                assert!(estimate.is_nan());
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn seeding_moves_to_iterating() {
        let solver = DewPointSolver::default();
        match solver.step(SolverState::Seeding, P, 1608.0) {
            SolverState::Iterating { bracket, .. } => {
                assert_eq!(bracket.iteration, 0);
                assert!((bracket.upper_c - bracket.lower_c - 0.4).abs() < 1e-12);
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
