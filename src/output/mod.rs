//! Output module for composed charts
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! └── visualization/      ← SVG/PNG rendering
//!     ├── mod.rs
//!     ├── config.rs
//!     └── moody.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use moody_chart::chart::{MoodyComposer, MoodyConfig};
//! use moody_chart::output::plot_moody_chart;
//!
//! let chart = MoodyComposer::new(MoodyConfig::default()).compose()?;
//! plot_moody_chart(&chart, "moody.png", None)?;
//! # Ok::<(), moody_chart::MoodyError>(())
//! ```
//!
//! # Design Philosophy
//!
//! Composition and rendering are separate: the chart module produces
//! backend-independent data, and this module is the only place that talks to
//! a drawing backend or the filesystem.

pub mod visualization;

// Re-export commonly used items for convenience
pub use visualization::{plot_moody_chart, render_figure, RenderConfig};
