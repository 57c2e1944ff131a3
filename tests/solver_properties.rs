//! Properties of the Colebrook solver
//!
//! These tests check the fixed-iteration accuracy claim over the whole
//! turbulent range of the chart, and the physical ordering of the curves.

use approx::assert_relative_eq;
use moody_chart::physics::{fully_rough_boundary, laminar_friction_factor, RegimeLimits};
use moody_chart::solver::{
    colebrook_residual,
    friction_factor,
    ColebrookSolver,
    FrictionSolver,
    SolverConfiguration,
};
use moody_chart::MoodyError;
use nalgebra::DVector;
use proptest::prelude::*;

fn log_uniform(min_exp: f64, max_exp: f64) -> impl Strategy<Value = f64> {
    (min_exp..max_exp).prop_map(|e| 10f64.powf(e))
}

fn solve(reynolds: &[f64], rr: f64, config: &SolverConfiguration) -> Vec<f64> {
    ColebrookSolver::new()
        .solve(&DVector::from_column_slice(reynolds), rr, config)
        .unwrap()
        .into_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn test_ten_sweeps_reach_residual_below_1e3(
        re in log_uniform(3.4, 8.0),
        rr in prop_oneof![Just(0.0), log_uniform(-6.0, -0.83)],
    ) {
        let f = solve(&[re], rr, &SolverConfiguration::default())[0];
        prop_assert!(f.is_finite() && f > 0.0);
        prop_assert!(colebrook_residual(re, rr, f).abs() < 1e-3);
    }

    #[test]
    fn test_solver_is_pure(
        re in log_uniform(3.5, 8.0),
        rr in log_uniform(-6.0, -1.0),
    ) {
        let config = SolverConfiguration::default();
        prop_assert_eq!(solve(&[re], rr, &config), solve(&[re], rr, &config));
    }

    #[test]
    fn test_friction_grows_with_roughness(
        re in log_uniform(3.6, 8.0),
        rr in log_uniform(-5.0, -1.5),
        factor in 1.5f64..4.0,
    ) {
        let config = SolverConfiguration::converged(1e-12, 200);
        let smoother = solve(&[re], rr, &config)[0];
        let rougher = solve(&[re], rr * factor, &config)[0];
        prop_assert!(rougher > smoother);
    }

    #[test]
    fn test_elements_are_independent(
        re_a in log_uniform(3.5, 8.0),
        re_b in log_uniform(3.5, 8.0),
        rr in log_uniform(-6.0, -1.0),
    ) {
        let config = SolverConfiguration::default();
        let together = solve(&[re_a, re_b], rr, &config);
        prop_assert_eq!(together[0], solve(&[re_a], rr, &config)[0]);
        prop_assert_eq!(together[1], solve(&[re_b], rr, &config)[0]);
    }
}

#[test]
fn test_smooth_pipe_reference_values() {
    // Smooth-pipe Colebrook values, as read off any Moody chart
    let f = solve(&[1e4, 1e5, 1e6], 0.0, &SolverConfiguration::converged(1e-12, 100));
    assert_relative_eq!(f[0], 0.0309, max_relative = 0.01);
    assert_relative_eq!(f[1], 0.0180, max_relative = 0.01);
    assert_relative_eq!(f[2], 0.0116, max_relative = 0.01);
}

#[test]
fn test_fixed_sweeps_match_converged_solution() {
    let reynolds: Vec<f64> = (0..30).map(|i| 4e3 * 10f64.powf(i as f64 * 0.15)).collect();
    for rr in [0.0, 1e-6, 1e-4, 1e-2, 0.15] {
        let fixed = solve(&reynolds, rr, &SolverConfiguration::default());
        let tight = solve(&reynolds, rr, &SolverConfiguration::converged(1e-13, 200));
        for (a, b) in fixed.iter().zip(&tight) {
            assert_relative_eq!(*a, *b, max_relative = 1e-4);
        }
    }
}

#[test]
fn test_high_reynolds_approaches_fully_rough_limit() {
    // Von Kármán: 1/√f = -2·log10(rr/3.7)
    let rr = 1e-2;
    let f = solve(&[1e10], rr, &SolverConfiguration::converged(1e-12, 100))[0];
    let rough = (2.0 * (rr / 3.7f64).log10()).powi(-2);
    assert_relative_eq!(f, rough, max_relative = 1e-3);
}

#[test]
fn test_converged_policy_reports_failure() {
    let err = ColebrookSolver::new()
        .solve(
            &DVector::from_vec(vec![1e5]),
            1e-4,
            &SolverConfiguration::converged(1e-15, 1),
        )
        .unwrap_err();
    assert!(matches!(err, MoodyError::NotConverged { iterations: 1, .. }));
}

#[test]
fn test_roughness_above_log_domain_is_undefined() {
    let err = ColebrookSolver::new()
        .solve(&DVector::from_vec(vec![1e5]), 5.0, &SolverConfiguration::default())
        .unwrap_err();
    assert!(matches!(err, MoodyError::UndefinedFriction { .. }));
}

#[test]
fn test_single_point_matches_regime() {
    let limits = RegimeLimits::default();
    assert_eq!(friction_factor(500.0, 0.01, &limits).unwrap(), laminar_friction_factor(500.0));

    let f = friction_factor(1e6, 1e-3, &limits).unwrap();
    let vector = solve(&[1e6], 1e-3, &SolverConfiguration::default())[0];
    assert_eq!(f, vector);
}

#[test]
fn test_fully_rough_boundary_below_smooth_pipe_is_undefined() {
    assert_eq!(fully_rough_boundary(500.0), None);
    assert!(fully_rough_boundary(1e6).is_some_and(|f| f > 0.0));
}
