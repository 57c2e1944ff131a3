//! moody-chart: Moody diagram generation
//!
//! Computes and draws the Moody chart: Darcy friction factor against Reynolds
//! number for pipe flow, one curve per relative roughness, on log-log axes.
//!
//! # Architecture
//!
//! moody-chart is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physics defines the laws and tables (laminar `64/Re`, fully-rough
//!      boundary, regime limits, roughness table)
//!    - Solvers provide the method for the implicit Colebrook–White relation
//!
//! 2. **Separation of Composition and Rendering**
//!    - The chart composer builds every curve, label and annotation as data
//!    - Renderers draw that data; the `plotters` renderer writes SVG and PNG
//!
//! # Quick Start
//!
//! ```rust
//! use moody_chart::chart::{FigureDescription, MoodyComposer, MoodyConfig};
//!
//! # fn main() -> Result<(), moody_chart::MoodyError> {
//! // 1. Configure the chart
//! let config = MoodyConfig::default();
//!
//! // 2. Compose it
//! let chart = MoodyComposer::new(config).compose()?;
//!
//! // 3. Inspect it, or draw it onto any Figure
//! println!("{}", chart.summary());
//! let mut figure = FigureDescription::new();
//! chart.draw(&mut figure);
//! # Ok(())
//! # }
//! ```
//!
//! Writing files goes through [`output::plot_moody_chart`].
//!
//! # Modules
//!
//! - [`physics`]: Flow laws, regime limits and the roughness table
//! - [`solver`]: Colebrook–White friction solver
//! - [`chart`]: Chart composition (curves, labels, grid, annotations)
//! - [`output`]: SVG/PNG rendering
//! - [`error`]: Error type

pub mod error;

// Core modules
pub mod physics;
pub mod solver;

pub mod chart;
pub mod output;

pub use error::{MoodyError, MoodyResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use moody_chart::prelude::*;
    //!
    //! let chart = MoodyComposer::new(MoodyConfig::default()).compose().unwrap();
    //! assert_eq!(chart.summary().boundary, 1);
    //! ```
    pub use crate::chart::{ColorMode,
                           Diagnostic,
                           Figure,
                           FigureDescription,
                           Locale,
                           MoodyChart,
                           MoodyComposer,
                           MoodyConfig};
    pub use crate::error::{MoodyError, MoodyResult};
    pub use crate::output::{plot_moody_chart, RenderConfig};
    pub use crate::physics::{RegimeLimits, RoughnessSpec, RoughnessTable};
    pub use crate::solver::{ColebrookSolver,
                            FrictionSolver,
                            IterationPolicy,
                            SolverConfiguration};
}
