//! Triangle adjacency extraction
//!
//! Scans every 2×2 block of a generated grid. A block whose diagonal cells
//! `b` and `c` have different owners splits into the triangles `(a, b, c)`
//! and `(b, d, c)`; each triangle is reported when its three owners are
//! distinct generators. Results go to a plain `FnMut(i32, i32, i32)`
//! callback, or into `Triangle` values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::generation::Grid;
use crate::generator::{Generator, GeneratorId};

/// Three generator tags found to meet at one grid block
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Triangle {
    pub fn new(a: i32, b: i32, c: i32) -> Self {
        Self { a, b, c }
    }

    /// Tags as an array, in emission order
    #[inline]
    pub fn tags(&self) -> [i32; 3] {
        [self.a, self.b, self.c]
    }

    /// Tags sorted ascending, for order-independent comparison
    pub fn sorted(&self) -> [i32; 3] {
        let mut tags = self.tags();
        tags.sort_unstable();
        tags
    }

    /// Check if the triangle references the given tag
    #[inline]
    pub fn contains(&self, tag: i32) -> bool {
        self.a == tag || self.b == tag || self.c == tag
    }
}

/// Report every triangle of `grid` whose generators pass `accept`
///
/// `callback` receives generator tags; `accept` sees generator ids.
pub(crate) fn extract<F, P>(grid: &Grid, generators: &[Generator], mut callback: F, mut accept: P)
where
    F: FnMut(i32, i32, i32),
    P: FnMut(GeneratorId, GeneratorId, GeneratorId) -> bool,
{
    let count_x = grid.count_x;
    let mut emit = |a: GeneratorId, b: GeneratorId, c: GeneratorId| {
        if accept(a, b, c) {
            callback(
                generators[a as usize].tag,
                generators[b as usize].tag,
                generators[c as usize].tag,
            );
        }
    };

    for y in 0..grid.count_y.saturating_sub(1) {
        for x in 0..count_x.saturating_sub(1) {
            let i = grid.cell_index(x, y);
            let a = grid.owners[i];
            let b = grid.owners[i + 1];
            let c = grid.owners[i + count_x];
            let d = grid.owners[i + 1 + count_x];
            if b == c {
                continue;
            }
            if a != b && a != c {
                emit(a, b, c);
            }
            if d != b && d != c {
                emit(b, d, c);
            }
        }
    }
}
