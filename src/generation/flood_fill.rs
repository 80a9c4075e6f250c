//! Initial cell ownership by flood fill
//!
//! Every generator starts at its own cell and spreads through 4-connected
//! neighbours. A cell belongs to the first generator whose task reaches it,
//! which is close to, but not always, the nearest generator.

use tracing::debug;

use super::grid::{Grid, UNSET};
use super::worklist::TaskQueue;
use crate::generator::{Generator, GeneratorId};

/// Assign an owner to every cell of `grid`
///
/// Returns the number of tasks processed.
pub(crate) fn flood_fill(grid: &mut Grid, generators: &[Generator], queue: &mut TaskQueue) -> usize {
    for (id, generator) in generators.iter().enumerate() {
        let (x, y) = grid.cell_of(generator.center);
        queue.push(x, y, grid.cell_index(x, y), id as GeneratorId);
    }

    let mut processed = 0;
    while let Some(task) = queue.pop() {
        processed += 1;
        // Already claimed cells stop the fill, no separate visited set
        if grid.owners[task.cell_index] != UNSET {
            continue;
        }
        grid.owners[task.cell_index] = task.candidate;
        queue.push_neighbors(
            task.x,
            task.y,
            task.cell_index,
            grid.count_x,
            grid.count_y,
            task.candidate,
        );
    }

    debug!(
        cells = grid.cell_count(),
        tasks = processed,
        "flood fill finished"
    );
    processed
}
