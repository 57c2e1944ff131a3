//! Visualization of Moody charts
//!
//! This module renders composed charts to image files using the `plotters`
//! library.
//!
//! # Organization
//!
//! - **config**: Render configuration (`RenderConfig`)
//! - **moody**: Log-log renderer for `MoodyChart` and `FigureDescription`
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use moody_chart::chart::{MoodyComposer, MoodyConfig};
//! use moody_chart::output::visualization::{plot_moody_chart, RenderConfig};
//!
//! let chart = MoodyComposer::new(MoodyConfig::default()).compose()?;
//!
//! // Vector output with default config
//! plot_moody_chart(&chart, "moody.svg", None)?;
//!
//! // Bitmap at print resolution
//! let config = RenderConfig::default().with_title("Moody diagram").with_dpi(300.0);
//! plot_moody_chart(&chart, "moody.png", Some(&config))?;
//! # Ok::<(), moody_chart::MoodyError>(())
//! ```
//!
//! # When to Use Which Function
//!
//! | Use Case | Function |
//! |----------|----------|
//! | Render a composed chart | `plot_moody_chart` |
//! | Render a figure recorded (and possibly edited) by hand | `render_figure` |

pub mod config;
pub mod moody;

pub use config::RenderConfig;

pub use moody::{plot_moody_chart, render_figure};
