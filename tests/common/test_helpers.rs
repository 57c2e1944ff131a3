//! Helper functions for integration tests

use moody_chart::chart::{FrictionCurve, MoodyChart, MoodyComposer, MoodyConfig};
use moody_chart::solver::FrictionSolver;

/// Compose with the Colebrook solver, panicking on error
pub fn compose(config: MoodyConfig) -> MoodyChart {
    MoodyComposer::new(config)
        .compose()
        .expect("composition should succeed")
}

/// Compose with a custom solver, panicking on error
pub fn compose_with(config: MoodyConfig, solver: impl FrictionSolver + 'static) -> MoodyChart {
    MoodyComposer::with_solver(config, Box::new(solver))
        .compose()
        .expect("composition should succeed")
}

pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

/// Assert that every Reynolds number of `curve` lies in `[min, max]`
pub fn assert_curve_inside_range(curve: &FrictionCurve, min: f64, max: f64) {
    for &re in curve.reynolds() {
        assert!(
            re >= min && re <= max,
            "{}: Re={} outside [{}, {}]",
            curve.kind(),
            re,
            min,
            max
        );
    }
}
