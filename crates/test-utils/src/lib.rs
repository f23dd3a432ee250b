//! Shared test utilities for the contouring workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Synthetic heightmap generators
//! - Single-cell corner fixtures
//! - Approximate equality assertions for coordinates
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;
pub use topo_common::Coordinate;

/// Macro for approximate floating-point equality assertions.
///
/// # Usage
///
/// ```ignore
/// use test_utils::assert_approx_eq;
///
/// assert_approx_eq!(1.0001_f64, 1.0_f64, 0.001_f64); // passes
/// assert_approx_eq!(1.1_f32, 1.0_f32, 0.001_f32);    // fails
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: f64 = $left as f64;
        let right: f64 = $right as f64;
        let epsilon: f64 = $epsilon as f64;
        let diff = (left - right).abs();
        if diff > epsilon {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}` > epsilon `{:?}`",
                left, right, diff, epsilon
            );
        }
    }};
}

/// Macro for approximate equality of two `Coordinate`s.
///
/// # Usage
///
/// ```ignore
/// use test_utils::{assert_coord_approx_eq, Coordinate};
///
/// assert_coord_approx_eq!(Coordinate::new(0.7501, 1.0), Coordinate::new(0.75, 1.0), 0.001);
/// ```
#[macro_export]
macro_rules! assert_coord_approx_eq {
    ($left:expr, $right:expr, $epsilon:expr) => {{
        let left: $crate::Coordinate = $left;
        let right: $crate::Coordinate = $right;
        $crate::assert_approx_eq!(left.x, right.x, $epsilon);
        $crate::assert_approx_eq!(left.y, right.y, $epsilon);
    }};
}
