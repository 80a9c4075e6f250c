//! Reusable work-list of cell tasks
//!
//! Both the flood fill and every relaxation round drain the same queue, so
//! its allocation is made once per `generate` and grows only when a phase
//! needs more tasks in flight than any phase before it.

use std::collections::VecDeque;

use crate::generator::GeneratorId;

/// Offer a generator as owner of one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Task {
    pub x: usize,
    pub y: usize,
    pub cell_index: usize,
    pub candidate: GeneratorId,
}

/// First-in-first-out queue of tasks
///
/// Processing in insertion order makes both phases expand breadth-first,
/// so every generator grows at the same pace from its seed cell.
#[derive(Debug, Default)]
pub(crate) struct TaskQueue {
    tasks: VecDeque<Task>,
    peak: usize,
}

impl TaskQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            tasks: VecDeque::with_capacity(capacity),
            peak: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, x: usize, y: usize, cell_index: usize, candidate: GeneratorId) {
        self.tasks.push_back(Task {
            x,
            y,
            cell_index,
            candidate,
        });
        self.peak = self.peak.max(self.tasks.len());
    }

    /// Queue the in-bounds 4-neighbours of `(x, y)`: west, north, east, south
    #[inline]
    pub fn push_neighbors(
        &mut self,
        x: usize,
        y: usize,
        cell_index: usize,
        count_x: usize,
        count_y: usize,
        candidate: GeneratorId,
    ) {
        if x > 0 {
            self.push(x - 1, y, cell_index - 1, candidate);
        }
        if y > 0 {
            self.push(x, y - 1, cell_index - count_x, candidate);
        }
        if x + 1 < count_x {
            self.push(x + 1, y, cell_index + 1, candidate);
        }
        if y + 1 < count_y {
            self.push(x, y + 1, cell_index + count_x, candidate);
        }
    }

    #[inline]
    pub fn pop(&mut self) -> Option<Task> {
        self.tasks.pop_front()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Largest number of tasks held at once
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }
}
