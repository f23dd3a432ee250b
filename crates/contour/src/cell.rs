//! Grid cells, their edges and the segments found inside them.

use serde::{Deserialize, Serialize};
use topo_common::Coordinate;

/// One axis of an edge anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisValue {
    /// Cell-local position along this axis is known.
    Fixed(f64),
    /// Filled in by interpolation along the edge.
    Pending,
}

/// Position of an edge within its cell, with the varying axis left pending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: AxisValue,
    pub y: AxisValue,
}

impl Anchor {
    /// Anchor for a vertical edge at cell-local `x`.
    pub fn vertical(x: f64) -> Self {
        Self {
            x: AxisValue::Fixed(x),
            y: AxisValue::Pending,
        }
    }

    /// Anchor for a horizontal edge at cell-local `y`.
    pub fn horizontal(y: f64) -> Self {
        Self {
            x: AxisValue::Pending,
            y: AxisValue::Fixed(y),
        }
    }

    /// Substitute `t` for the pending axis.
    pub fn resolve(&self, t: f64) -> Coordinate {
        let axis = |value: AxisValue| match value {
            AxisValue::Fixed(v) => v,
            AxisValue::Pending => t,
        };
        Coordinate::new(axis(self.x), axis(self.y))
    }
}

/// Which side of the cell an edge runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

/// One side of a cell.
///
/// `from` and `to` are the corner elevations in traversal order; the
/// interpolated position runs from `from` (t = 0) to `to` (t = 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub side: Side,
    pub from: i32,
    pub to: i32,
    pub anchor: Anchor,
}

impl Edge {
    pub fn new(side: Side, from: i32, to: i32) -> Self {
        let anchor = match side {
            Side::Left => Anchor::vertical(0.0),
            Side::Top => Anchor::horizontal(1.0),
            Side::Right => Anchor::vertical(1.0),
            Side::Bottom => Anchor::horizontal(0.0),
        };
        Self {
            side,
            from,
            to,
            anchor,
        }
    }
}

/// Corner elevations of a cell, listed clockwise from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corners {
    pub top_left: i32,
    pub top_right: i32,
    pub bottom_right: i32,
    pub bottom_left: i32,
}

impl Corners {
    pub fn new(top_left: i32, top_right: i32, bottom_right: i32, bottom_left: i32) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    pub fn as_array(&self) -> [i32; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// Mean of the four corners, used to resolve saddle cells.
    pub fn center(&self) -> f64 {
        self.as_array().iter().map(|&c| c as f64).sum::<f64>() / 4.0
    }
}

/// A single contour crossing through one cell (a "pixline").
///
/// Coordinates are cell-local: `x` grows east, `y` grows from the bottom
/// edge (0) to the top edge (1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub level: i32,
    pub start: Coordinate,
    pub end: Coordinate,
}

/// A unit square of the heightmap at grid position `(x, z)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: usize,
    pub z: usize,
    pub corners: Corners,
    /// Visited in order: left, top, right, bottom.
    pub edges: [Edge; 4],
    pub min_corner_height: i32,
    pub max_corner_height: i32,
    pub segments: Vec<Segment>,
}

impl Cell {
    pub fn new(corners: Corners, x: usize, z: usize) -> Self {
        let Corners {
            top_left: tl,
            top_right: tr,
            bottom_right: br,
            bottom_left: bl,
        } = corners;

        let edges = [
            Edge::new(Side::Left, bl, tl),
            Edge::new(Side::Top, tl, tr),
            Edge::new(Side::Right, br, tr),
            Edge::new(Side::Bottom, bl, br),
        ];

        let heights = corners.as_array();
        let min_corner_height = heights.iter().copied().min().unwrap_or(tl);
        let max_corner_height = heights.iter().copied().max().unwrap_or(tl);

        Self {
            x,
            z,
            corners,
            edges,
            min_corner_height,
            max_corner_height,
            segments: Vec::new(),
        }
    }

    /// All four corners share one elevation.
    pub fn is_flat(&self) -> bool {
        self.min_corner_height == self.max_corner_height
    }

    /// Diagonal corners lie on opposite sides of the band `lower..lower + 1`.
    pub fn is_saddle(&self, lower: i32) -> bool {
        let above = |h: i32| h > lower;
        let c = &self.corners;
        above(c.top_left) == above(c.bottom_right)
            && above(c.top_right) == above(c.bottom_left)
            && above(c.top_left) != above(c.top_right)
    }
}
