//! Numerical methods for the friction factor
//!
//! This module contains concrete implementations of the
//! [`FrictionSolver`](crate::solver::FrictionSolver) trait.
//!
//! # Available Methods
//!
//! - **[`ColebrookSolver`]**: fixed-point (Picard) iteration of Colebrook–White
//!   - Cost: one logarithm and one square root per element per sweep
//!   - Default: ten sweeps, no convergence check
//!   - Optional: tolerance-driven sweeps through
//!     [`IterationPolicy::Converged`](crate::solver::IterationPolicy::Converged)

pub mod colebrook;

pub use colebrook::{colebrook_residual, ColebrookSolver, COLEBROOK_SEED};
