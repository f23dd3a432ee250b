//! Per-cell contour extraction over a whole heightmap.

use rayon::prelude::*;
use std::time::Instant;
use topo_common::{Coordinate, Heightmap, TopoError, TopoResult};

use crate::cell::{Cell, Corners, Segment};
use crate::config::ContourConfig;
use crate::levels::qualifying_levels;

/// A heightmap together with the cells extracted from it.
///
/// Cells are empty until [`extract`] runs; each run rebuilds them from
/// scratch. Once extraction returns the grid is meant to be handed to
/// consumers as a read-only snapshot.
#[derive(Debug, Clone)]
pub struct Grid {
    heightmap: Heightmap,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new(heightmap: Heightmap) -> Self {
        Self {
            heightmap,
            cells: Vec::new(),
        }
    }

    /// Validate nested rows and wrap them in a grid.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> TopoResult<Self> {
        Ok(Self::new(Heightmap::from_rows(rows)?))
    }

    pub fn heightmap(&self) -> &Heightmap {
        &self.heightmap
    }

    /// Cells by row (`z`) then column (`x`); empty before extraction.
    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn cell(&self, x: usize, z: usize) -> Option<&Cell> {
        self.cells.get(z).and_then(|row| row.get(x))
    }

    pub fn is_extracted(&self) -> bool {
        !self.cells.is_empty()
    }

    /// All segments in row-major cell order.
    pub fn segments(&self) -> impl Iterator<Item = (&Cell, &Segment)> {
        self.cells
            .iter()
            .flatten()
            .flat_map(|cell| cell.segments.iter().map(move |seg| (cell, seg)))
    }

    pub fn segment_count(&self) -> usize {
        self.cells.iter().flatten().map(|c| c.segments.len()).sum()
    }

    pub fn into_cells(self) -> Vec<Vec<Cell>> {
        self.cells
    }
}

/// Extract contour segments for every cell of `grid`.
///
/// Cells from any earlier run are discarded first, then the configuration is
/// validated. On error the grid's cells are left empty; there are no partial
/// results.
pub fn extract(grid: &mut Grid, config: &ContourConfig) -> TopoResult<()> {
    grid.cells.clear();
    config.validate()?;

    let started = Instant::now();
    let heightmap = &grid.heightmap;
    let (cols, rows) = heightmap.cell_dims();

    tracing::debug!(
        cols = heightmap.cols(),
        rows = heightmap.rows(),
        interval = config.interval,
        offset = config.offset,
        saddle = config.saddle.as_str(),
        parallel = config.parallel,
        "extracting contours"
    );

    let build_row = |z: usize| -> TopoResult<Vec<Cell>> {
        (0..cols)
            .map(|x| -> TopoResult<Cell> {
                let mut cell = Cell::new(corners_at(heightmap, x, z), x, z);
                fill_cell(&mut cell, config)?;
                Ok(cell)
            })
            .collect()
    };

    let cells = if config.parallel {
        (0..rows)
            .into_par_iter()
            .map(build_row)
            .collect::<TopoResult<Vec<_>>>()?
    } else {
        (0..rows).map(build_row).collect::<TopoResult<Vec<_>>>()?
    };

    grid.cells = cells;

    tracing::debug!(
        cells = cols * rows,
        segments = grid.segment_count(),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        "extracted contours"
    );

    Ok(())
}

/// Extract the segments of a single cell, replacing any it already has.
pub fn extract_cell(cell: &mut Cell, config: &ContourConfig) -> TopoResult<()> {
    config.validate()?;
    fill_cell(cell, config)
}

/// Build a grid from nested rows and extract it with the default saddle
/// handling on the current thread.
pub fn square_march(rows: Vec<Vec<i32>>, interval: i32, offset: i32) -> TopoResult<Grid> {
    let config = ContourConfig::new(interval, offset);
    config.validate()?;

    let mut grid = Grid::from_rows(rows)?;
    extract(&mut grid, &config)?;
    Ok(grid)
}

fn fill_cell(cell: &mut Cell, config: &ContourConfig) -> TopoResult<()> {
    let mut segments = Vec::new();

    for lower in qualifying_levels(
        cell.min_corner_height,
        cell.max_corner_height,
        config.interval,
        config.offset,
    ) {
        let crossings: Vec<Coordinate> = cell
            .edges
            .iter()
            .filter_map(|edge| edge.crossing(lower))
            .collect();

        let found = config
            .saddle
            .pair(&cell.corners, lower, &crossings)
            .map_err(|count| {
                tracing::error!(
                    x = cell.x,
                    z = cell.z,
                    level = lower,
                    crossings = count,
                    "odd number of edge crossings"
                );
                TopoError::InternalInvariant {
                    x: cell.x,
                    z: cell.z,
                    level: lower,
                    crossings: count,
                }
            })?;

        segments.extend(found);
    }

    cell.segments = segments;
    Ok(())
}

fn corners_at(heightmap: &Heightmap, x: usize, z: usize) -> Corners {
    let cols = heightmap.cols();
    let s = heightmap.samples();
    Corners::new(
        s[z * cols + x],
        s[z * cols + x + 1],
        s[(z + 1) * cols + x + 1],
        s[(z + 1) * cols + x],
    )
}
