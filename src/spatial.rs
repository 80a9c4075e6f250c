//! Exact nearest-generator queries for checking a generated grid
//!
//! This module is only available with the `spatial-index` feature.

use glam::Vec2;
use kiddo::immutable::float::kdtree::ImmutableKdTree;
use kiddo::SquaredEuclidean;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generation::Grid;
use crate::generator::Generator;

/// Relative slack when comparing squared distances from different code paths
const DISTANCE_EPSILON: f32 = 1e-5;

/// Wrapper around KD-tree for nearest-generator lookups
///
/// Built over generator centers. Item `i` is the generator with id `i`.
#[derive(Clone)]
pub struct SpatialIndex {
    tree: ImmutableKdTree<f32, usize, 2, 32>,
}

impl SpatialIndex {
    /// Build spatial index from generator centers
    ///
    /// # Example
    ///
    /// ```
    /// use grid_voronoi::*;
    ///
    /// let centers = vec![
    ///     Vec2::new(0.0, 0.0),
    ///     Vec2::new(10.0, 0.0),
    ///     Vec2::new(0.0, 10.0),
    /// ];
    ///
    /// let index = SpatialIndex::new(&centers);
    /// assert_eq!(index.find_nearest(Vec2::new(8.0, 1.0)), 1);
    /// ```
    pub fn new(centers: &[Vec2]) -> Self {
        let points: Vec<[f32; 2]> = centers.iter().map(|c| [c.x, c.y]).collect();

        Self {
            tree: ImmutableKdTree::new_from_slice(&points),
        }
    }

    /// Index of the center nearest to `position`
    pub fn find_nearest(&self, position: Vec2) -> usize {
        self.nearest(position).0
    }

    /// Index of and squared distance to the nearest center
    fn nearest(&self, position: Vec2) -> (usize, f32) {
        let result = self
            .tree
            .nearest_one::<SquaredEuclidean>(&[position.x, position.y]);
        (result.item as usize, result.distance)
    }

    /// Count cells whose owner is farther than the true nearest generator
    ///
    /// Distances are measured in grid-local units, the same space the
    /// relaxation works in. Equal distances count as correct.
    pub(crate) fn check_grid(&self, grid: &Grid, generators: &[Generator]) -> OwnershipReport {
        let mut report = OwnershipReport {
            cells: grid.cell_count(),
            ..Default::default()
        };

        for y in 0..grid.count_y {
            for x in 0..grid.count_x {
                let cell = Vec2::new(x as f32, y as f32);
                let owner = &generators[grid.owner(x, y) as usize];
                let owner_d2 = owner.distance_squared_to(cell.x, cell.y);
                let (_, nearest_d2) = self.nearest(cell);

                if owner_d2 > nearest_d2 * (1.0 + DISTANCE_EPSILON) + DISTANCE_EPSILON {
                    report.mismatched += 1;
                    let excess = owner_d2.sqrt() - nearest_d2.sqrt();
                    report.max_excess = report.max_excess.max(excess);
                }
            }
        }

        report
    }
}

/// How far a generated grid is from exact nearest-generator ownership
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OwnershipReport {
    /// Cells checked
    pub cells: usize,
    /// Cells owned by a generator that is not the nearest one
    pub mismatched: usize,
    /// Largest gap, in cells, between a cell's owner and its nearest generator
    pub max_excess: f32,
}

impl OwnershipReport {
    /// Check if every cell is owned by a nearest generator
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.mismatched == 0
    }

    /// Fraction of cells with a non-nearest owner
    pub fn mismatch_ratio(&self) -> f32 {
        if self.cells == 0 {
            return 0.0;
        }
        self.mismatched as f32 / self.cells as f32
    }
}
