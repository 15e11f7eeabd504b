use glam::DVec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A normalized pupil sampling raster.
///
/// Implementations produce exactly `n` points in [-1, 1]^2 and must be
/// deterministic for a given raster value.
pub trait PupilRaster {
    /// Generate `n` normalized sample points.
    fn grid(&self, n: usize) -> Vec<DVec2>;
}

/// Rectangular raster: a row-major square grid covering [-1, 1]^2,
/// truncated to exactly `n` points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectGrid;

impl PupilRaster for RectGrid {
    fn grid(&self, n: usize) -> Vec<DVec2> {
        let side = (n as f64).sqrt().ceil() as usize;
        let coord = |i: usize| {
            if side < 2 {
                0.0
            } else {
                -1.0 + 2.0 * i as f64 / (side - 1) as f64
            }
        };
        let mut points = Vec::with_capacity(n);
        'rows: for j in 0..side {
            for i in 0..side {
                if points.len() == n {
                    break 'rows;
                }
                points.push(DVec2::new(coord(i), coord(j)));
            }
        }
        points
    }
}

/// Uniform random raster with a fixed seed for reproducibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomGrid {
    /// Seed of the sampling RNG; equal seeds yield equal grids.
    pub seed: u64,
}

impl Default for RandomGrid {
    fn default() -> Self {
        Self { seed: 0 }
    }
}

impl PupilRaster for RandomGrid {
    fn grid(&self, n: usize) -> Vec<DVec2> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        (0..n)
            .map(|_| {
                DVec2::new(
                    rng.random_range(-1.0..=1.0),
                    rng.random_range(-1.0..=1.0),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_grid_exact_count_and_bounds() {
        let points = RectGrid.grid(100);
        assert_eq!(points.len(), 100);
        for p in &points {
            assert!(p.x >= -1.0 && p.x <= 1.0);
            assert!(p.y >= -1.0 && p.y <= 1.0);
        }
    }

    #[test]
    fn test_rect_grid_points_are_distinct() {
        let points = RectGrid.grid(100);
        for (i, p) in points.iter().enumerate() {
            for q in &points[i + 1..] {
                assert!(p != q, "duplicate sample point {p:?}");
            }
        }
    }

    #[test]
    fn test_rect_grid_identical_across_calls() {
        assert_eq!(RectGrid.grid(100), RectGrid.grid(100));
        assert_eq!(RectGrid.grid(7), RectGrid.grid(7));
    }

    #[test]
    fn test_rect_grid_small_counts() {
        assert!(RectGrid.grid(0).is_empty());
        assert_eq!(RectGrid.grid(1), vec![DVec2::ZERO]);
        let four = RectGrid.grid(4);
        assert_eq!(four[0], DVec2::new(-1.0, -1.0));
        assert_eq!(four[3], DVec2::new(1.0, 1.0));
    }

    #[test]
    fn test_random_grid_reproducible() {
        let raster = RandomGrid { seed: 42 };
        let a = raster.grid(50);
        let b = raster.grid(50);
        assert_eq!(a, b);
        assert_eq!(a.len(), 50);
        for p in &a {
            assert!(p.x >= -1.0 && p.x <= 1.0);
            assert!(p.y >= -1.0 && p.y <= 1.0);
        }
    }

    #[test]
    fn test_random_grid_seed_changes_grid() {
        let a = RandomGrid { seed: 1 }.grid(10);
        let b = RandomGrid { seed: 2 }.grid(10);
        assert_ne!(a, b);
    }
}
