//! Friction solver traits and types
//!
//! # Design
//!
//! - `IterationPolicy` says HOW LONG to iterate (fixed budget or tolerance)
//! - `SolverConfiguration` wraps the policy and validates it
//! - `FrictionSolution` carries the friction factors plus iteration metadata
//! - `FrictionSolver` is the seam the chart composer depends on, so the
//!   composer can be driven by any friction model (or a test double)

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::error::MoodyResult;

/// Iteration count of the reference Colebrook behaviour
pub const DEFAULT_ITERATIONS: usize = 10;

// =================================================================================================
// Iteration policy
// =================================================================================================

/// How a fixed-point friction solver decides to stop
///
/// # Examples
///
/// ```rust
/// use moody_chart::solver::IterationPolicy;
///
/// // Reference behaviour: exactly ten sweeps, no convergence check
/// let fixed = IterationPolicy::Fixed { iterations: 10 };
///
/// // Opt-in accuracy guarantee
/// let converged = IterationPolicy::Converged { tolerance: 1e-10, max_iterations: 100 };
/// assert!(converged.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum IterationPolicy {
    /// Apply the update exactly `iterations` times to every element
    ///
    /// Timing is deterministic and no convergence signal is produced.
    Fixed { iterations: usize },

    /// Iterate until the largest Colebrook residual drops below `tolerance`
    ///
    /// Fails when `max_iterations` sweeps are not enough.
    Converged { tolerance: f64, max_iterations: usize },
}

impl Default for IterationPolicy {
    fn default() -> Self {
        IterationPolicy::Fixed { iterations: DEFAULT_ITERATIONS }
    }
}

impl IterationPolicy {
    /// Get name identifier
    pub fn name(&self) -> &str {
        match self {
            IterationPolicy::Fixed { .. } => "Fixed",
            IterationPolicy::Converged { .. } => "Converged",
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        match self {
            IterationPolicy::Fixed { .. } => Ok(()),
            IterationPolicy::Converged { tolerance, max_iterations } => {
                if !tolerance.is_finite() || *tolerance <= 0.0 {
                    return Err("Tolerance must be positive".to_string());
                }
                if *max_iterations == 0 {
                    return Err("Maximum iterations must be positive".to_string());
                }
                Ok(())
            }
        }
    }
}

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for a friction solver
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfiguration {
    /// Stopping policy
    pub policy: IterationPolicy,
}

impl SolverConfiguration {
    pub fn new(policy: IterationPolicy) -> Self {
        Self { policy }
    }

    /// Fixed iteration budget
    pub fn fixed(iterations: usize) -> Self {
        Self::new(IterationPolicy::Fixed { iterations })
    }

    /// Tolerance-driven iteration
    pub fn converged(tolerance: f64, max_iterations: usize) -> Self {
        Self::new(IterationPolicy::Converged { tolerance, max_iterations })
    }

    pub fn validate(&self) -> Result<(), String> {
        self.policy.validate()
    }
}

// =================================================================================================
// Solution
// =================================================================================================

/// Friction factors for one roughness over a Reynolds sequence
#[derive(Clone, Debug, PartialEq)]
pub struct FrictionSolution {
    /// Friction factor per Reynolds sample
    pub friction: DVector<f64>,

    /// Sweeps applied to the whole vector
    pub iterations: usize,

    /// Largest absolute Colebrook residual after the last sweep
    pub residual: f64,
}

impl FrictionSolution {
    pub fn new(friction: DVector<f64>, iterations: usize, residual: f64) -> Self {
        Self { friction, iterations, residual }
    }

    pub fn len(&self) -> usize {
        self.friction.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friction.is_empty()
    }

    /// Friction factor at the largest Reynolds number
    pub fn last(&self) -> Option<f64> {
        self.friction.iter().last().copied()
    }

    /// Smallest friction factor of the sequence
    pub fn min(&self) -> Option<f64> {
        self.friction.iter().copied().reduce(f64::min)
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.friction.iter().copied().collect()
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// A method computing turbulent friction factors
///
/// Implementations are stateless: the same inputs always give the same
/// solution.
pub trait FrictionSolver {
    /// Solve for every Reynolds number in `reynolds` at roughness
    /// `relative_roughness`
    fn solve(
        &self,
        reynolds: &DVector<f64>,
        relative_roughness: f64,
        config: &SolverConfiguration,
    ) -> MoodyResult<FrictionSolution>;

    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_is_ten_fixed_iterations() {
        assert_eq!(
            SolverConfiguration::default().policy,
            IterationPolicy::Fixed { iterations: 10 }
        );
    }

    #[test]
    fn test_converged_policy_validation() {
        assert!(SolverConfiguration::converged(1e-8, 50).validate().is_ok());
        assert_eq!(
            SolverConfiguration::converged(0.0, 50).validate().unwrap_err(),
            "Tolerance must be positive"
        );
        assert_eq!(
            SolverConfiguration::converged(1e-8, 0).validate().unwrap_err(),
            "Maximum iterations must be positive"
        );
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(IterationPolicy::default().name(), "Fixed");
        assert_eq!(SolverConfiguration::converged(1e-6, 5).policy.name(), "Converged");
    }

    #[test]
    fn test_policy_json_tagging() {
        let config: SolverConfiguration =
            serde_json::from_str(r#"{"policy": {"mode": "converged", "tolerance": 1e-9, "max_iterations": 40}}"#)
                .unwrap();
        assert_eq!(config, SolverConfiguration::converged(1e-9, 40));
    }

    #[test]
    fn test_solution_accessors() {
        let solution = FrictionSolution::new(DVector::from_vec(vec![0.03, 0.02, 0.025]), 10, 1e-9);
        assert_eq!(solution.len(), 3);
        assert_eq!(solution.last(), Some(0.025));
        assert_eq!(solution.min(), Some(0.02));
        assert_eq!(solution.into_vec(), vec![0.03, 0.02, 0.025]);
    }

    #[test]
    fn test_empty_solution() {
        let solution = FrictionSolution::new(DVector::zeros(0), 10, 0.0);
        assert!(solution.is_empty());
        assert_eq!(solution.last(), None);
        assert_eq!(solution.min(), None);
    }
}
