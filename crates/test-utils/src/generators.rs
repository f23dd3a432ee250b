//! Synthetic terrain generators.
//!
//! All generators return nested rows (`rows[z][x]`) ready for
//! `Heightmap::from_rows`, and are fully deterministic.

/// Creates a heightmap filled with one elevation.
pub fn create_flat_heightmap(cols: usize, rows: usize, height: i32) -> Vec<Vec<i32>> {
    vec![vec![height; cols]; rows]
}

/// Creates a heightmap rising by `step` per column, west to east.
///
/// With interval 1, every cell is crossed by `step` levels, each as a
/// single segment between the top and bottom edges.
pub fn create_east_ramp(cols: usize, rows: usize, step: i32) -> Vec<Vec<i32>> {
    (0..rows)
        .map(|_| (0..cols).map(|x| x as i32 * step).collect())
        .collect()
}

/// Creates a cone peaking at `peak` in the middle of the grid and falling
/// off by one unit per cell of Chebyshev distance.
pub fn create_cone(cols: usize, rows: usize, peak: i32) -> Vec<Vec<i32>> {
    let cx = (cols / 2) as i64;
    let cz = (rows / 2) as i64;
    (0..rows)
        .map(|z| {
            (0..cols)
                .map(|x| {
                    let d = (x as i64 - cx).abs().max((z as i64 - cz).abs());
                    peak - d as i32
                })
                .collect()
        })
        .collect()
}

/// Creates a checkerboard of `low` and `high` samples, where every cell is
/// a saddle.
pub fn create_checkerboard(cols: usize, rows: usize, low: i32, high: i32) -> Vec<Vec<i32>> {
    (0..rows)
        .map(|z| {
            (0..cols)
                .map(|x| if (x + z) % 2 == 0 { low } else { high })
                .collect()
        })
        .collect()
}

/// Creates rough terrain in `base..base + relief` from a seeded hash.
pub fn create_random_terrain(
    cols: usize,
    rows: usize,
    base: i32,
    relief: u32,
    seed: u32,
) -> Vec<Vec<i32>> {
    let relief = relief.max(1);
    (0..rows)
        .map(|z| {
            (0..cols)
                .map(|x| base + (simple_hash(x as u32, z as u32, seed) % relief) as i32)
                .collect()
        })
        .collect()
}

/// Creates smooth rolling hills from overlapping sine waves.
pub fn create_rolling_hills(cols: usize, rows: usize, amplitude: f64) -> Vec<Vec<i32>> {
    use std::f64::consts::PI;
    (0..rows)
        .map(|z| {
            (0..cols)
                .map(|x| {
                    let fx = x as f64 / cols.max(1) as f64;
                    let fz = z as f64 / rows.max(1) as f64;
                    let v = (fx * PI * 4.0).sin() + (fz * PI * 4.0).sin()
                        + 0.5 * ((fx + fz) * PI * 2.0).sin();
                    (64.0 + amplitude * v).round() as i32
                })
                .collect()
        })
        .collect()
}

/// Flatten nested rows into row-major order.
pub fn flatten(rows: &[Vec<i32>]) -> Vec<i32> {
    rows.iter().flatten().copied().collect()
}

/// Simple deterministic hash for reproducible test data.
fn simple_hash(x: u32, y: u32, seed: u32) -> u32 {
    let mut h = seed;
    h = h.wrapping_mul(31).wrapping_add(x);
    h = h.wrapping_mul(31).wrapping_add(y);
    h ^= h >> 16;
    h = h.wrapping_mul(0x85ebca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2ae35);
    h ^= h >> 16;
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_flat_heightmap() {
        let rows = create_flat_heightmap(4, 3, 7);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 4 && r.iter().all(|&h| h == 7)));
    }

    #[test]
    fn test_create_east_ramp() {
        let rows = create_east_ramp(3, 2, 5);
        assert_eq!(rows, vec![vec![0, 5, 10], vec![0, 5, 10]]);
    }

    #[test]
    fn test_create_cone() {
        let rows = create_cone(5, 5, 10);
        assert_eq!(rows[2][2], 10);
        assert_eq!(rows[0][0], 8);
        assert_eq!(rows[2][4], 8);
    }

    #[test]
    fn test_create_checkerboard() {
        let rows = create_checkerboard(3, 2, 0, 2);
        assert_eq!(rows, vec![vec![0, 2, 0], vec![2, 0, 2]]);
    }

    #[test]
    fn test_random_terrain_is_deterministic() {
        let a = create_random_terrain(16, 16, -20, 40, 42);
        let b = create_random_terrain(16, 16, -20, 40, 42);
        assert_eq!(a, b);
        assert!(a.iter().flatten().all(|&h| (-20..20).contains(&h)));

        let c = create_random_terrain(16, 16, -20, 40, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten(&[vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
    }
}
