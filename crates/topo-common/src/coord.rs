//! Resolved 2D coordinates.

use serde::{Deserialize, Serialize};

/// A point with both axes resolved.
///
/// Contour segments carry these in cell-local space, each axis in `0..=1`.
/// Translating into world space is left to the consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset this coordinate, e.g. by a cell's grid position.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether both axes lie within the unit square.
    pub fn in_unit_square(&self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Coordinate::new(0.25, 1.0), Coordinate::new(0.25, 1.0));
        assert_ne!(Coordinate::new(0.25, 1.0), Coordinate::new(1.0, 0.25));
    }

    #[test]
    fn test_translate() {
        let c = Coordinate::new(0.75, 0.0).translate(3.0, 5.0);
        assert_eq!(c, Coordinate::new(3.75, 5.0));
    }

    #[test]
    fn test_in_unit_square() {
        assert!(Coordinate::new(0.0, 1.0).in_unit_square());
        assert!(!Coordinate::new(1.25, 0.5).in_unit_square());
    }
}
