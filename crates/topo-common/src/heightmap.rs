//! Rectangular grids of integer elevation samples.

use crate::{TopoError, TopoResult};

/// Smallest grid that still contains one cell.
pub const MIN_DIMENSION: usize = 2;

/// A validated, rectangular grid of integer elevations.
///
/// Samples are stored in row-major order: row `z` (north to south), column `x`
/// (west to east). The heightmap is supplied by whatever reads the world data
/// and is never modified by contour extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heightmap {
    samples: Vec<i32>,
    cols: usize,
    rows: usize,
}

impl Heightmap {
    /// Build a heightmap from nested rows.
    ///
    /// Fails if there are fewer than two rows or columns, or if any row's
    /// length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> TopoResult<Self> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        check_dimensions(cols, rows.len())?;

        let mut samples = Vec::with_capacity(cols * rows.len());
        for (z, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(TopoError::malformed_grid(format!(
                    "row {} has {} samples, expected {}",
                    z,
                    row.len(),
                    cols
                )));
            }
            samples.extend_from_slice(row);
        }

        Ok(Self {
            samples,
            cols,
            rows: rows.len(),
        })
    }

    /// Build a heightmap from row-major data.
    pub fn from_flat(data: Vec<i32>, cols: usize, rows: usize) -> TopoResult<Self> {
        check_dimensions(cols, rows)?;
        let expected = cols.checked_mul(rows).ok_or_else(|| {
            TopoError::malformed_grid(format!("{}x{} grid is too large", cols, rows))
        })?;
        if data.len() != expected {
            return Err(TopoError::malformed_grid(format!(
                "{} samples do not fill a {}x{} grid",
                data.len(),
                cols,
                rows
            )));
        }

        Ok(Self {
            samples: data,
            cols,
            rows,
        })
    }

    /// Build a heightmap from floating-point rows, as produced by loosely
    /// typed sources. Every value must be finite, integral and fit in `i32`.
    pub fn from_f64_rows(rows: Vec<Vec<f64>>) -> TopoResult<Self> {
        let converted = rows
            .iter()
            .enumerate()
            .map(|(z, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, &v)| to_elevation(v, x, z))
                    .collect::<TopoResult<Vec<i32>>>()
            })
            .collect::<TopoResult<Vec<Vec<i32>>>>()?;

        Self::from_rows(converted)
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells along each axis: `(cols - 1, rows - 1)`.
    pub fn cell_dims(&self) -> (usize, usize) {
        (self.cols - 1, self.rows - 1)
    }

    /// Sample at column `x`, row `z`.
    pub fn get(&self, x: usize, z: usize) -> Option<i32> {
        if x >= self.cols || z >= self.rows {
            return None;
        }
        Some(self.samples[z * self.cols + x])
    }

    /// One row of samples.
    pub fn row(&self, z: usize) -> Option<&[i32]> {
        if z >= self.rows {
            return None;
        }
        let start = z * self.cols;
        Some(&self.samples[start..start + self.cols])
    }

    /// Row-major sample data.
    pub fn samples(&self) -> &[i32] {
        &self.samples
    }

    /// Lowest and highest sample.
    pub fn min_max(&self) -> (i32, i32) {
        self.samples
            .iter()
            .fold((i32::MAX, i32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }
}

fn check_dimensions(cols: usize, rows: usize) -> TopoResult<()> {
    if rows < MIN_DIMENSION || cols < MIN_DIMENSION {
        return Err(TopoError::malformed_grid(format!(
            "grid is {}x{}, need at least {}x{}",
            cols, rows, MIN_DIMENSION, MIN_DIMENSION
        )));
    }
    Ok(())
}

fn to_elevation(value: f64, x: usize, z: usize) -> TopoResult<i32> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(TopoError::malformed_grid(format!(
            "sample ({}, {}) is not an integer elevation: {}",
            x, z, value
        )));
    }
    if value < i32::MIN as f64 || value > i32::MAX as f64 {
        return Err(TopoError::malformed_grid(format!(
            "sample ({}, {}) is out of range: {}",
            x, z, value
        )));
    }
    Ok(value as i32)
}
