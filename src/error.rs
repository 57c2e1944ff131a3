//! Crate-wide error type
//!
//! Recoverable conditions (empty curve domains, unrecognized options) are not
//! errors: they are reported as [`Diagnostic`](crate::chart::Diagnostic)s on
//! the composed chart. `MoodyError` covers the faults that stop composition
//! or rendering.

use thiserror::Error;

pub type MoodyResult<T> = Result<T, MoodyError>;

#[derive(Debug, Error)]
pub enum MoodyError {
    /// Configuration failed validation before any computation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The Colebrook iteration left the domain of the logarithm or produced a
    /// non-finite friction factor
    #[error("friction factor undefined for Re={reynolds}, rr={relative_roughness}")]
    UndefinedFriction {
        reynolds: f64,
        relative_roughness: f64,
    },

    /// Tolerance-driven iteration exhausted its budget
    #[error(
        "Colebrook iteration did not converge for rr={relative_roughness} \
         after {iterations} iterations (residual {residual:e})"
    )]
    NotConverged {
        relative_roughness: f64,
        iterations: usize,
        residual: f64,
    },

    /// A solver returned a result that cannot form a curve
    #[error("invalid curve: {0}")]
    InvalidCurve(String),

    #[error("render failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
