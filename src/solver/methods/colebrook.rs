//! Colebrook–White fixed-point solver
//!
//! # Mathematical Background
//!
//! The Colebrook–White relation for turbulent pipe flow is implicit in `f`:
//!
//! ```text
//! 1/√f = -2·log10( rr/3.7 + 2.51/(Re·√f) )
//! ```
//!
//! Rearranged as a fixed point:
//!
//! ```text
//! f_{k+1} = [ 2·log10( rr/3.7 + 2.51/(Re·√f_k) ) ]^(-2)
//! ```
//!
//! In terms of `x = 1/√f` the map is `x ↦ -2·log10(a + b·x)` with derivative
//! magnitude `2b / (ln 10 · (a + b·x))`, well below one over the chart's
//! Reynolds and roughness ranges. The error contracts by roughly an order of
//! magnitude per sweep, so ten sweeps from the seed `f = 0.04` leave a
//! residual far under `1e-3`.
//!
//! # Domain
//!
//! A solution requires `0 < rr/3.7 + 2.51/(Re·√f) < 1` (the right-hand side
//! must be positive). Inputs or iterates outside that domain are reported as
//! [`MoodyError::UndefinedFriction`] instead of turning into NaN.
//!
//! # Example
//!
//! ```rust
//! use moody_chart::solver::{ColebrookSolver, FrictionSolver, SolverConfiguration};
//! use nalgebra::DVector;
//!
//! let reynolds = DVector::from_vec(vec![1e4, 1e5, 1e6]);
//! let solution = ColebrookSolver::new()
//!     .solve(&reynolds, 1e-4, &SolverConfiguration::default())
//!     .unwrap();
//! assert_eq!(solution.iterations, 10);
//! assert!(solution.residual < 1e-3);
//! ```

use nalgebra::DVector;

use crate::error::{MoodyError, MoodyResult};
use crate::solver::{FrictionSolution, FrictionSolver, IterationPolicy, SolverConfiguration};

/// Initial friction factor of every element
pub const COLEBROOK_SEED: f64 = 0.04;

// =================================================================================================
// Colebrook solver
// =================================================================================================

/// Picard iteration of the Colebrook–White equation
///
/// The update is applied to the whole vector at once: every Reynolds number
/// receives the same number of sweeps.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColebrookSolver;

impl ColebrookSolver {
    pub fn new() -> Self {
        Self
    }
}

impl FrictionSolver for ColebrookSolver {
    fn solve(
        &self,
        reynolds: &DVector<f64>,
        relative_roughness: f64,
        config: &SolverConfiguration,
    ) -> MoodyResult<FrictionSolution> {
        config.validate().map_err(MoodyError::InvalidConfig)?;
        validate_inputs(reynolds, relative_roughness)?;

        let mut friction = DVector::from_element(reynolds.len(), COLEBROOK_SEED);

        match config.policy {
            IterationPolicy::Fixed { iterations } => {
                for _ in 0..iterations {
                    friction = sweep(reynolds, relative_roughness, &friction)?;
                }
                let residual = max_residual(reynolds, relative_roughness, &friction);
                Ok(FrictionSolution::new(friction, iterations, residual))
            }
            IterationPolicy::Converged { tolerance, max_iterations } => {
                let mut iterations = 0;
                let mut residual = max_residual(reynolds, relative_roughness, &friction);

                while residual >= tolerance {
                    if iterations == max_iterations {
                        return Err(MoodyError::NotConverged {
                            relative_roughness,
                            iterations,
                            residual,
                        });
                    }
                    friction = sweep(reynolds, relative_roughness, &friction)?;
                    iterations += 1;
                    residual = max_residual(reynolds, relative_roughness, &friction);
                }

                log::debug!(
                    "Colebrook rr={relative_roughness}: converged in {iterations} iterations \
                     (residual {residual:e})"
                );
                Ok(FrictionSolution::new(friction, iterations, residual))
            }
        }
    }

    fn name(&self) -> &str {
        "Colebrook-White fixed point"
    }
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Colebrook–White residual `1/√f + 2·log10(rr/3.7 + 2.51/(Re·√f))`
///
/// Zero when `f` solves the equation exactly.
pub fn colebrook_residual(reynolds: f64, relative_roughness: f64, friction: f64) -> f64 {
    let root = friction.sqrt();
    1.0 / root + 2.0 * (relative_roughness / 3.7 + 2.51 / (reynolds * root)).log10()
}

/// One fixed-point update, `None` when it leaves the domain
fn colebrook_step(reynolds: f64, relative_roughness: f64, friction: f64) -> Option<f64> {
    let argument = relative_roughness / 3.7 + 2.51 / (reynolds * friction.sqrt());
    if !(argument > 0.0 && argument < 1.0) {
        return None;
    }
    let next = (2.0 * argument.log10()).powi(-2);
    (next.is_finite() && next > 0.0).then_some(next)
}

fn sweep(
    reynolds: &DVector<f64>,
    relative_roughness: f64,
    friction: &DVector<f64>,
) -> MoodyResult<DVector<f64>> {
    let updated = reynolds
        .iter()
        .zip(friction.iter())
        .map(|(&re, &f)| {
            colebrook_step(re, relative_roughness, f).ok_or(MoodyError::UndefinedFriction {
                reynolds: re,
                relative_roughness,
            })
        })
        .collect::<MoodyResult<Vec<f64>>>()?;

    Ok(DVector::from_vec(updated))
}

fn max_residual(reynolds: &DVector<f64>, relative_roughness: f64, friction: &DVector<f64>) -> f64 {
    reynolds
        .iter()
        .zip(friction.iter())
        .map(|(&re, &f)| colebrook_residual(re, relative_roughness, f).abs())
        .fold(0.0, f64::max)
}

fn validate_inputs(reynolds: &DVector<f64>, relative_roughness: f64) -> MoodyResult<()> {
    if !relative_roughness.is_finite() || relative_roughness < 0.0 {
        return Err(MoodyError::UndefinedFriction {
            reynolds: reynolds.iter().copied().next().unwrap_or(f64::NAN),
            relative_roughness,
        });
    }
    match reynolds.iter().find(|re| !re.is_finite() || **re <= 0.0) {
        Some(&re) => Err(MoodyError::UndefinedFriction {
            reynolds: re,
            relative_roughness,
        }),
        None => Ok(()),
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solve_default(reynolds: Vec<f64>, rr: f64) -> FrictionSolution {
        ColebrookSolver::new()
            .solve(&DVector::from_vec(reynolds), rr, &SolverConfiguration::default())
            .unwrap()
    }

    #[test]
    fn test_solver_name() {
        assert_eq!(ColebrookSolver::new().name(), "Colebrook-White fixed point");
    }

    #[test]
    fn test_output_length_matches_input() {
        let solution = solve_default(vec![3000.0, 1e4, 1e5, 1e6, 1e7], 1e-3);
        assert_eq!(solution.len(), 5);
        assert_eq!(solution.iterations, 10);
    }

    #[test]
    fn test_smooth_pipe_reference_value() {
        // Smooth-pipe Colebrook value at Re = 1e5 is about 0.0180
        let solution = solve_default(vec![1e5], 0.0);
        assert_relative_eq!(solution.friction[0], 0.0180, max_relative = 5e-3);
    }

    #[test]
    fn test_fully_rough_reference_value() {
        // At very high Re the viscous term vanishes: f → (2·log10(3.7/rr))^-2
        let solution = solve_default(vec![1e8], 0.01);
        let asymptote = (2.0 * (3.7_f64 / 0.01).log10()).powi(-2);
        assert_relative_eq!(solution.friction[0], asymptote, max_relative = 1e-3);
    }

    #[test]
    fn test_residual_below_threshold_after_ten_iterations() {
        let reynolds = vec![3000.0, 1e4, 1e5, 1e6, 1e7, 1e8];
        for rr in [0.0, 1e-6, 1e-4, 1e-2, 0.15] {
            let solution = solve_default(reynolds.clone(), rr);
            for (re, f) in reynolds.iter().zip(solution.friction.iter()) {
                assert!(
                    colebrook_residual(*re, rr, *f).abs() < 1e-3,
                    "residual too large at Re={re}, rr={rr}"
                );
            }
        }
    }

    #[test]
    fn test_fixed_policy_applies_exact_iteration_count() {
        let reynolds = DVector::from_vec(vec![1e5]);
        let one = ColebrookSolver::new()
            .solve(&reynolds, 1e-3, &SolverConfiguration::fixed(1))
            .unwrap();
        let expected = (2.0 * (1e-3 / 3.7 + 2.51 / (1e5 * COLEBROOK_SEED.sqrt())).log10()).powi(-2);
        assert_eq!(one.friction[0], expected);
        assert_eq!(one.iterations, 1);
    }

    #[test]
    fn test_zero_iterations_returns_seed() {
        let solution = ColebrookSolver::new()
            .solve(&DVector::from_vec(vec![1e4, 1e6]), 1e-3, &SolverConfiguration::fixed(0))
            .unwrap();
        assert!(solution.friction.iter().all(|&f| f == COLEBROOK_SEED));
    }

    #[test]
    fn test_elementwise_update_is_independent_of_neighbours() {
        let together = solve_default(vec![1e4, 1e6], 2e-4);
        let alone = solve_default(vec![1e6], 2e-4);
        assert_eq!(together.friction[1], alone.friction[0]);
    }

    #[test]
    fn test_converged_policy_reaches_tolerance() {
        let solution = ColebrookSolver::new()
            .solve(
                &DVector::from_vec(vec![3000.0, 1e5, 1e8]),
                0.0,
                &SolverConfiguration::converged(1e-12, 100),
            )
            .unwrap();
        assert!(solution.residual < 1e-12);
        assert!(solution.iterations > 0);
    }

    #[test]
    fn test_converged_policy_reports_exhausted_budget() {
        let error = ColebrookSolver::new()
            .solve(
                &DVector::from_vec(vec![1e5]),
                0.0,
                &SolverConfiguration::converged(1e-15, 1),
            )
            .unwrap_err();
        assert!(matches!(error, MoodyError::NotConverged { iterations: 1, .. }));
    }

    #[test]
    fn test_invalid_policy_is_rejected() {
        let error = ColebrookSolver::new()
            .solve(&DVector::from_vec(vec![1e5]), 0.0, &SolverConfiguration::converged(-1.0, 10))
            .unwrap_err();
        assert!(matches!(error, MoodyError::InvalidConfig(_)));
    }

    #[test]
    fn test_non_positive_reynolds_is_undefined() {
        let error = ColebrookSolver::new()
            .solve(&DVector::from_vec(vec![1e5, 0.0]), 1e-3, &SolverConfiguration::default())
            .unwrap_err();
        assert!(matches!(error, MoodyError::UndefinedFriction { reynolds, .. } if reynolds == 0.0));
    }

    #[test]
    fn test_negative_roughness_is_undefined() {
        let error = ColebrookSolver::new()
            .solve(&DVector::from_vec(vec![1e5]), -0.1, &SolverConfiguration::default())
            .unwrap_err();
        assert!(matches!(error, MoodyError::UndefinedFriction { .. }));
    }

    #[test]
    fn test_logarithm_outside_domain_is_undefined() {
        // rr/3.7 > 1: the right-hand side of Colebrook would be positive
        let error = ColebrookSolver::new()
            .solve(&DVector::from_vec(vec![1e5]), 5.0, &SolverConfiguration::default())
            .unwrap_err();
        assert!(matches!(error, MoodyError::UndefinedFriction { relative_roughness, .. } if relative_roughness == 5.0));
    }

    #[test]
    fn test_empty_input_gives_empty_solution() {
        let solution = solve_default(vec![], 1e-3);
        assert!(solution.is_empty());
        assert_eq!(solution.residual, 0.0);
    }
}
