//! Edge interpolation with a half-step bias.
//!
//! A contour level `lower` separates elevations `<= lower` from elevations
//! `>= lower + 1`. The crossing is placed at the middle of that integer band
//! rather than at the raw linear crossing of `lower`, which is where the
//! extra `0.5 / diff` term comes from. Consumers depend on this exact offset.

use topo_common::Coordinate;

use crate::cell::Edge;

/// Position along an edge running from elevation `from` (t = 0) to `to`
/// (t = 1) where contour `lower` crosses, or `None` if it does not cross.
pub fn interpolate(from: i32, to: i32, lower: i32) -> Option<f64> {
    let (from, to, lower) = (from as i64, to as i64, lower as i64);
    let upper = lower + 1;

    if from < to && from <= lower && to >= upper {
        let diff = (to - from) as f64;
        Some((lower - from) as f64 / diff + 0.5 / diff)
    } else if from > to && from >= upper && to <= lower {
        let diff = (from - to) as f64;
        Some(1.0 - (upper - to) as f64 / diff + 0.5 / diff)
    } else {
        None
    }
}

impl Edge {
    /// Cell-local point where contour `lower` crosses this edge.
    pub fn crossing(&self, lower: i32) -> Option<Coordinate> {
        interpolate(self.from, self.to, lower).map(|t| self.anchor.resolve(t))
    }
}
