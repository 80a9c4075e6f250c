//! Deterministic generator layouts
//!
//! Particle groups are filled on a square lattice whose spacing is the
//! particle stride. These helpers produce such layouts (optionally with
//! seeded jitter) for demos, benchmarks and tests.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Lattice points with spacing `stride` that fall inside a circle
///
/// Rows run bottom to top, points left to right within a row, like a
/// particle group filled from its shape's bounding box.
///
/// # Example
///
/// ```rust
/// use grid_voronoi::scatter::lattice_in_circle;
/// use grid_voronoi::Vec2;
///
/// let points = lattice_in_circle(Vec2::ZERO, 1.0, 1.0);
/// assert_eq!(points.len(), 5); // centre plus four axis neighbours
/// ```
pub fn lattice_in_circle(center: Vec2, radius: f32, stride: f32) -> Vec<Vec2> {
    if stride.is_nan() || stride <= 0.0 || radius.is_nan() || radius < 0.0 {
        return Vec::new();
    }

    let steps = (radius / stride).floor() as i32;
    let radius_squared = radius * radius;
    let mut points = Vec::new();

    for j in -steps..=steps {
        for i in -steps..=steps {
            let offset = Vec2::new(i as f32, j as f32) * stride;
            if offset.length_squared() <= radius_squared {
                points.push(center + offset);
            }
        }
    }

    points
}

/// A `columns × rows` lattice with seeded random jitter
///
/// Each point is displaced by up to `jitter * stride` along each axis. The
/// same seed always produces the same layout.
///
/// # Example
///
/// ```rust
/// use grid_voronoi::scatter::jittered_lattice;
///
/// let points = jittered_lattice(4, 3, 0.5, 0.25, 42);
/// assert_eq!(points.len(), 12);
/// assert_eq!(points, jittered_lattice(4, 3, 0.5, 0.25, 42));
/// ```
pub fn jittered_lattice(columns: usize, rows: usize, stride: f32, jitter: f32, seed: u32) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let amount = (jitter * stride).abs();

    let mut points = Vec::with_capacity(columns * rows);
    for y in 0..rows {
        for x in 0..columns {
            let base = Vec2::new(x as f32, y as f32) * stride;
            let offset = if amount > 0.0 {
                Vec2::new(rng.gen_range(-amount..amount), rng.gen_range(-amount..amount))
            } else {
                Vec2::ZERO
            };
            points.push(base + offset);
        }
    }

    points
}

/// `count` points uniformly distributed in the rectangle `[lower, upper)`
pub fn uniform_points(count: usize, lower: Vec2, upper: Vec2, seed: u32) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as u64);
    let extent = upper - lower;

    (0..count)
        .map(|_| {
            let t = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());
            lower + t * extent
        })
        .collect()
}
