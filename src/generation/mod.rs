//! Grid voronoi generation
//!
//! Runs the three phases in order: grid allocation over the generators'
//! bounding box, flood-fill seeding and local relaxation. The same work-list
//! backs both seeding and relaxation.

mod flood_fill;
pub(crate) mod grid;
mod relax;
mod worklist;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span};

use crate::config::DiagramConfig;
use crate::error::Result;
use crate::generator::Generator;

pub(crate) use grid::Grid;
use worklist::TaskQueue;

/// Statistics collected while generating a diagram
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateStats {
    /// Grid width in cells
    pub count_x: usize,
    /// Grid height in cells
    pub count_y: usize,
    /// Tasks processed by the flood fill
    pub seed_tasks: usize,
    /// Relaxation rounds run (including the final round without changes)
    pub relaxation_rounds: usize,
    /// Total cell reassignments made by relaxation
    pub reassignments: usize,
    /// `true` if relaxation stopped at a fixed point rather than the round budget
    pub converged: bool,
    /// Most tasks held by the work-list at once
    pub peak_tasks: usize,
}

impl GenerateStats {
    /// Total number of grid cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.count_x * self.count_y
    }
}

/// Partition a grid over `generators`
///
/// Generator centers are rewritten into grid-local units. All validation
/// happens before any cell is touched; once the grid exists the phases cannot
/// fail.
pub(crate) fn generate_grid(
    generators: &mut [Generator],
    config: &DiagramConfig,
) -> Result<(Grid, GenerateStats)> {
    let span = debug_span!("generate", generators = generators.len(), radius = config.radius);
    let _enter = span.enter();

    let mut grid = Grid::allocate(generators, config)?;
    debug!(
        count_x = grid.count_x,
        count_y = grid.count_y,
        "grid allocated"
    );

    let mut queue = TaskQueue::with_capacity(generators.len().max(grid.count_x + grid.count_y));
    let seed_tasks = flood_fill::flood_fill(&mut grid, generators, &mut queue);
    debug_assert!(grid.is_complete());

    let max_rounds = config.relaxation_round_limit(grid.count_x, grid.count_y);
    let outcome = relax::relax(&mut grid, generators, &mut queue, max_rounds);
    debug_assert!(queue.is_empty());

    let stats = GenerateStats {
        count_x: grid.count_x,
        count_y: grid.count_y,
        seed_tasks,
        relaxation_rounds: outcome.rounds,
        reassignments: outcome.reassignments,
        converged: outcome.converged,
        peak_tasks: queue.peak(),
    };
    Ok((grid, stats))
}
