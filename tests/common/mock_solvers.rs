//! Friction solvers with predictable output
//!
//! Used to drive the chart composer without depending on the Colebrook
//! iteration.

use std::sync::{Arc, Mutex};

use moody_chart::solver::{FrictionSolution, FrictionSolver, SolverConfiguration};
use moody_chart::{MoodyError, MoodyResult};
use nalgebra::DVector;

// =================================================================================================
// Constant friction
// =================================================================================================

/// Returns the same friction factor for every Reynolds number
pub struct ConstantSolver {
    pub friction: f64,
}

impl ConstantSolver {
    pub fn new(friction: f64) -> Self {
        Self { friction }
    }
}

impl FrictionSolver for ConstantSolver {
    fn solve(
        &self,
        reynolds: &DVector<f64>,
        _relative_roughness: f64,
        _config: &SolverConfiguration,
    ) -> MoodyResult<FrictionSolution> {
        Ok(FrictionSolution::new(
            DVector::from_element(reynolds.len(), self.friction),
            0,
            0.0,
        ))
    }

    fn name(&self) -> &str {
        "Constant"
    }
}

// =================================================================================================
// Always failing
// =================================================================================================

/// Reports non-convergence for every roughness
pub struct FailingSolver;

impl FrictionSolver for FailingSolver {
    fn solve(
        &self,
        _reynolds: &DVector<f64>,
        relative_roughness: f64,
        _config: &SolverConfiguration,
    ) -> MoodyResult<FrictionSolution> {
        Err(MoodyError::NotConverged {
            relative_roughness,
            iterations: 0,
            residual: f64::INFINITY,
        })
    }

    fn name(&self) -> &str {
        "Failing"
    }
}

// =================================================================================================
// Call recorder
// =================================================================================================

/// Records `(relative roughness, first Re, sample count)` of every call
///
/// Returns the smooth-pipe Blasius friction `0.316 / Re^0.25`.
#[derive(Default)]
pub struct RecordingSolver {
    pub calls: Mutex<Vec<(f64, f64, usize)>>,
}

impl RecordingSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<(f64, f64, usize)> {
        self.calls.lock().unwrap().clone()
    }
}

impl FrictionSolver for RecordingSolver {
    fn solve(
        &self,
        reynolds: &DVector<f64>,
        relative_roughness: f64,
        _config: &SolverConfiguration,
    ) -> MoodyResult<FrictionSolution> {
        self.calls
            .lock()
            .unwrap()
            .push((relative_roughness, reynolds[0], reynolds.len()));
        Ok(FrictionSolution::new(reynolds.map(|re| 0.316 / re.powf(0.25)), 0, 0.0))
    }

    fn name(&self) -> &str {
        "Recording"
    }
}

/// Hands a solver to the composer while the test keeps a handle on it
pub struct SharedSolver<T>(pub Arc<T>);

impl<T: FrictionSolver> FrictionSolver for SharedSolver<T> {
    fn solve(
        &self,
        reynolds: &DVector<f64>,
        relative_roughness: f64,
        config: &SolverConfiguration,
    ) -> MoodyResult<FrictionSolution> {
        self.0.solve(reynolds, relative_roughness, config)
    }

    fn name(&self) -> &str {
        self.0.name()
    }
}
