//! Common utilities for integration tests

#![allow(dead_code)]

pub mod mock_solvers;
pub mod test_helpers;

// Re-export commonly used items
pub use mock_solvers::{ConstantSolver, FailingSolver, RecordingSolver, SharedSolver};
pub use test_helpers::{
    assert_curve_inside_range,
    compose,
    compose_with,
    is_strictly_increasing,
};
