//! Local relaxation toward nearest-generator ownership
//!
//! Wherever two adjacent cells disagree on their owner, each cell is offered
//! its neighbour's owner. A cell switches only to a strictly closer generator
//! and then offers its new owner to its own neighbours, so corrections travel
//! outward until the grid reaches a fixed point or the round budget runs out.

use tracing::{debug, trace};

use super::grid::Grid;
use super::worklist::TaskQueue;
use crate::generator::Generator;

/// Outcome of the relaxation phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RelaxOutcome {
    pub rounds: usize,
    pub reassignments: usize,
    pub converged: bool,
}

/// Run up to `max_rounds` relaxation rounds over a fully owned grid
pub(crate) fn relax(
    grid: &mut Grid,
    generators: &[Generator],
    queue: &mut TaskQueue,
    max_rounds: usize,
) -> RelaxOutcome {
    let mut outcome = RelaxOutcome::default();

    for round in 0..max_rounds {
        let challenges = queue_disagreements(grid, queue);
        let changed = resolve_challenges(grid, generators, queue);

        outcome.rounds = round + 1;
        outcome.reassignments += changed;
        trace!(round, challenges, changed, "relaxation round");

        if changed == 0 {
            outcome.converged = true;
            break;
        }
    }

    debug!(
        rounds = outcome.rounds,
        reassignments = outcome.reassignments,
        converged = outcome.converged,
        "relaxation finished"
    );
    outcome
}

/// Queue a challenge in both directions for every adjacent pair with
/// different owners; returns the number of tasks queued
fn queue_disagreements(grid: &Grid, queue: &mut TaskQueue) -> usize {
    let (count_x, count_y) = (grid.count_x, grid.count_y);
    let mut queued = 0;

    for y in 0..count_y {
        for x in 0..count_x.saturating_sub(1) {
            let i = grid.cell_index(x, y);
            let a = grid.owners[i];
            let b = grid.owners[i + 1];
            if a != b {
                queue.push(x, y, i, b);
                queue.push(x + 1, y, i + 1, a);
                queued += 2;
            }
        }
    }

    for y in 0..count_y.saturating_sub(1) {
        for x in 0..count_x {
            let i = grid.cell_index(x, y);
            let a = grid.owners[i];
            let b = grid.owners[i + count_x];
            if a != b {
                queue.push(x, y, i, b);
                queue.push(x, y + 1, i + count_x, a);
                queued += 2;
            }
        }
    }

    queued
}

/// Drain the queue, moving cells to strictly closer candidates; returns the
/// number of reassignments
fn resolve_challenges(grid: &mut Grid, generators: &[Generator], queue: &mut TaskQueue) -> usize {
    let mut changed = 0;

    while let Some(task) = queue.pop() {
        let current = grid.owners[task.cell_index];
        if current == task.candidate {
            continue;
        }

        let (x, y) = (task.x as f32, task.y as f32);
        let current_d2 = generators[current as usize].distance_squared_to(x, y);
        let candidate_d2 = generators[task.candidate as usize].distance_squared_to(x, y);

        // Ties keep the current owner
        if current_d2 > candidate_d2 {
            grid.owners[task.cell_index] = task.candidate;
            changed += 1;
            queue.push_neighbors(
                task.x,
                task.y,
                task.cell_index,
                grid.count_x,
                grid.count_y,
                task.candidate,
            );
        }
    }

    changed
}
