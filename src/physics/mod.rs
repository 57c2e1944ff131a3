//! Pipe-flow physics
//!
//! This module holds the closed-form pieces of the Moody chart and the
//! immutable data tables that drive it:
//!
//! - **Flow laws** ([`flow`]): laminar Hagen–Poiseuille friction `f = 64/Re`,
//!   the fully-rough boundary curve, flow-regime classification
//! - **Regime limits** ([`RegimeLimits`]): the Reynolds numbers separating
//!   laminar, critical and turbulent flow on the chart
//! - **Roughness table** ([`roughness`]): which constant-roughness curves are
//!   drawn and where each one starts
//!
//! The implicit Colebrook–White relation lives in [`crate::solver`]: the
//! physics layer provides the equations, the solver provides the method.
//!
//! # Example
//!
//! ```rust
//! use moody_chart::physics::{laminar_friction_factor, FlowRegime, RegimeLimits};
//!
//! let limits = RegimeLimits::default();
//! assert_eq!(laminar_friction_factor(1000.0), 0.064);
//! assert_eq!(FlowRegime::classify(1000.0, &limits), FlowRegime::Laminar);
//! assert_eq!(FlowRegime::classify(1e6, &limits), FlowRegime::Turbulent);
//! ```

pub mod flow;
pub mod roughness;

pub use flow::{
    fully_rough_boundary,
    laminar_friction_factor,
    FlowRegime,
    RegimeLimits,
};
pub use roughness::{RoughnessSpec, RoughnessTable};
