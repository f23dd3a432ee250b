//! Contour level enumeration.
//!
//! A cell spanning elevations `min..=max` can be crossed by every integer
//! band boundary `lower` in `min..max`. Only those aligned to the contour
//! interval (after shifting by the offset) are drawn.

/// Whether contour `lower` is drawn for the given interval and offset.
///
/// Uses a Euclidean remainder so negative elevations and offsets align the
/// same way as positive ones.
pub fn is_qualifying(lower: i32, interval: i32, offset: i32) -> bool {
    interval > 0 && (lower as i64 + offset as i64).rem_euclid(interval as i64) == 0
}

/// Contour levels drawn through a cell with corner range `min..=max`.
///
/// The upper bound is exclusive, so a flat cell yields nothing. A
/// non-positive interval also yields nothing; callers validate it up front.
pub fn qualifying_levels(
    min: i32,
    max: i32,
    interval: i32,
    offset: i32,
) -> impl Iterator<Item = i32> {
    (min..max).filter(move |&lower| is_qualifying(lower, interval, offset))
}

/// Number of levels [`qualifying_levels`] yields, computed directly.
pub fn level_count(min: i32, max: i32, interval: i32, offset: i32) -> usize {
    if interval <= 0 || max <= min {
        return 0;
    }
    let interval = interval as i64;
    let offset = offset as i64;
    let below = |n: i64| (n + offset).div_euclid(interval);

    (below(max as i64 - 1) - below(min as i64 - 1)) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_with_unit_interval() {
        let levels: Vec<i32> = qualifying_levels(3, 7, 1, 0).collect();
        assert_eq!(levels, vec![3, 4, 5, 6]);
    }

    #[test]
    fn test_interval_and_offset() {
        let levels: Vec<i32> = qualifying_levels(0, 20, 5, 0).collect();
        assert_eq!(levels, vec![0, 5, 10, 15]);

        let levels: Vec<i32> = qualifying_levels(0, 20, 5, 2).collect();
        assert_eq!(levels, vec![3, 8, 13, 18]);
    }

    #[test]
    fn test_negative_elevations() {
        let levels: Vec<i32> = qualifying_levels(-12, 3, 5, 0).collect();
        assert_eq!(levels, vec![-10, -5, 0]);

        let levels: Vec<i32> = qualifying_levels(-4, 4, 4, -1).collect();
        assert_eq!(levels, vec![-3, 1]);
    }

    #[test]
    fn test_flat_range() {
        assert_eq!(qualifying_levels(5, 5, 1, 0).count(), 0);
        assert_eq!(level_count(5, 5, 1, 0), 0);
    }

    #[test]
    fn test_invalid_interval_yields_nothing() {
        assert_eq!(qualifying_levels(0, 10, 0, 0).count(), 0);
        assert_eq!(qualifying_levels(0, 10, -2, 0).count(), 0);
        assert_eq!(level_count(0, 10, -2, 0), 0);
    }

    #[test]
    fn test_level_count_matches_enumeration() {
        for interval in [1, 2, 3, 5, 10] {
            for offset in -7..7 {
                for min in -15..15 {
                    for span in 0..12 {
                        let max = min + span;
                        assert_eq!(
                            level_count(min, max, interval, offset),
                            qualifying_levels(min, max, interval, offset).count(),
                            "min={min} max={max} interval={interval} offset={offset}"
                        );
                    }
                }
            }
        }
    }
}
