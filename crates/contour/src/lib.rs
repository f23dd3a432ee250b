//! Contour extraction for integer heightmaps.
//!
//! A marching squares variant that handles any number of integer contour
//! levels per cell:
//! - Cells and their four interpolation edges
//! - Level enumeration by interval and offset
//! - Half-step biased edge interpolation
//! - Crossing pairing, with optional saddle disambiguation
//!
//! Segments are left per cell in cell-local coordinates. Joining them into
//! polylines and rendering is up to the caller.

pub mod cell;
pub mod config;
pub mod extract;
pub mod interpolate;
pub mod levels;
pub mod pairing;

pub use cell::{Anchor, AxisValue, Cell, Corners, Edge, Segment, Side};
pub use config::ContourConfig;
pub use extract::{extract, extract_cell, square_march, Grid};
pub use levels::{level_count, qualifying_levels};
pub use pairing::{CrossingPairer, SaddleResolution, SearchState};
pub use topo_common::{Coordinate, Heightmap, TopoError, TopoResult};
