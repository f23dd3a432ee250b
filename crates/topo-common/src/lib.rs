//! Common types shared across the topographic contouring crates.

pub mod coord;
pub mod error;
pub mod heightmap;

pub use coord::Coordinate;
pub use error::{TopoError, TopoResult};
pub use heightmap::Heightmap;
