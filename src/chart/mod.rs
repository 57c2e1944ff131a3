//! Moody chart composition
//!
//! This module turns a [`MoodyConfig`] into a [`MoodyChart`]: every curve,
//! label, grid line and annotation of the chart in data coordinates. Nothing
//! here touches a drawing backend; a chart is replayed onto any
//! [`Figure`] and the `plotters` renderer lives in [`crate::output`].
//!
//! # Organization
//!
//! - **config**: `MoodyConfig`, `Locale`, `ColorMode`, `Palette`
//! - **domain**: log-spaced Reynolds samples and regime segments
//! - **curves**: `FrictionCurve`, `CurveKind`, `LineStyle`
//! - **labels**: localized texts and roughness notation
//! - **annotations**: the four flow-region arrows
//! - **grid**: three-tier log grid and tick labels
//! - **composer**: `MoodyComposer`, the pipeline tying the above together
//! - **moody**: `MoodyChart`, `Diagnostic`, `ChartSummary`
//! - **figure**: the `Figure` trait and the recording `FigureDescription`
//!
//! # Quick Start
//!
//! ```rust
//! use moody_chart::chart::{FigureDescription, MoodyComposer, MoodyConfig};
//!
//! let config = MoodyConfig::from_json_str(r#"{ "lang": "es" }"#).unwrap();
//! let chart = MoodyComposer::new(config).compose().unwrap();
//!
//! let mut figure = FigureDescription::new();
//! chart.draw(&mut figure);
//! assert_eq!(figure.regions().count(), 4);
//! ```

pub mod annotations;
pub mod composer;
pub mod config;
pub mod curves;
pub mod domain;
pub mod figure;
pub mod grid;
pub mod labels;
pub mod moody;

pub use annotations::{ArrowHeads, PlotRegion, RegionAnnotation};
pub use composer::MoodyComposer;
pub use config::{ColorMode, Locale, MoodyConfig, Palette};
pub use curves::{CurveKind, FrictionCurve, LineStyle};
pub use domain::ReynoldsDomain;
pub use figure::{
    AxisSpec,
    Figure,
    FigureDescription,
    LineSpec,
    Primitive,
    RectangleSpec,
    RegionSpec,
    TextAnchor,
    TextSpec,
};
pub use grid::{Axis, GridLine, GridTier, Tick};
pub use labels::{Labels, RoughnessLabel, RoughnessNotation};
pub use moody::{ChartSummary, CriticalZone, Diagnostic, MoodyChart, SecondaryLabel};
