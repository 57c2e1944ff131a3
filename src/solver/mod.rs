//! Friction factor solvers
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Configuration** (`SolverConfiguration`) - HOW LONG to iterate
//!    - Fixed sweep budget (the default, ten sweeps)
//!    - Tolerance on the Colebrook residual (opt-in)
//!
//! 2. **Solver** (`FrictionSolver` trait) - The numerical method
//!    - Takes a Reynolds vector and one relative roughness
//!    - Returns one friction factor per Reynolds number
//!    - Pure: no state survives between calls
//!
//! # Module Organization
//!
//! - **`traits`**: `FrictionSolver`, `IterationPolicy`, `SolverConfiguration`,
//!   `FrictionSolution`
//! - **`methods`**: concrete solvers (`ColebrookSolver`)
//!
//! # Quick Start Example
//!
//! ```rust
//! use moody_chart::solver::{ColebrookSolver, FrictionSolver, SolverConfiguration};
//! use nalgebra::DVector;
//!
//! let reynolds = DVector::from_vec(vec![5e3, 5e4, 5e5]);
//! let solver = ColebrookSolver::new();
//!
//! // Reference behaviour: ten sweeps
//! let fixed = solver.solve(&reynolds, 1e-3, &SolverConfiguration::default()).unwrap();
//!
//! // Guaranteed accuracy
//! let tight = solver
//!     .solve(&reynolds, 1e-3, &SolverConfiguration::converged(1e-12, 100))
//!     .unwrap();
//! assert!(tight.residual < 1e-12);
//! assert_eq!(fixed.len(), tight.len());
//! ```
//!
//! # Single points
//!
//! [`friction_factor`] evaluates one operating point, choosing the laminar law
//! or Colebrook from the regime limits.

pub mod traits;
pub mod methods;

pub use traits::{
    FrictionSolution,
    FrictionSolver,
    IterationPolicy,
    SolverConfiguration,
    DEFAULT_ITERATIONS,
};

pub use methods::{colebrook_residual, ColebrookSolver, COLEBROOK_SEED};

use nalgebra::DVector;

use crate::error::{MoodyError, MoodyResult};
use crate::physics::{laminar_friction_factor, RegimeLimits};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Friction factor of a single operating point
///
/// Uses `64/Re` up to `limits.laminar_max` and the default Colebrook
/// iteration above it.
///
/// # Example
///
/// ```rust
/// use moody_chart::physics::RegimeLimits;
/// use moody_chart::solver::friction_factor;
///
/// let limits = RegimeLimits::default();
/// assert_eq!(friction_factor(1000.0, 0.0, &limits).unwrap(), 0.064);
/// assert!(friction_factor(1e6, 1e-4, &limits).unwrap() < 0.02);
/// ```
pub fn friction_factor(reynolds: f64, relative_roughness: f64, limits: &RegimeLimits) -> MoodyResult<f64> {
    if !reynolds.is_finite() || reynolds <= 0.0 {
        return Err(MoodyError::UndefinedFriction { reynolds, relative_roughness });
    }
    if reynolds <= limits.laminar_max {
        return Ok(laminar_friction_factor(reynolds));
    }

    let solution = ColebrookSolver::new().solve(
        &DVector::from_element(1, reynolds),
        relative_roughness,
        &SolverConfiguration::default(),
    )?;
    Ok(solution.friction[0])
}

// =================================================================================================
// Tests
// =================================================================================================
