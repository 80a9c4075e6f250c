//! Grid allocation over the generators' bounding box

use glam::Vec2;
use tracing::debug;

use crate::config::DiagramConfig;
use crate::error::{Result, VoronoiError};
use crate::generator::{Generator, GeneratorId};

/// Owner slot value for a cell nobody has claimed yet
pub(crate) const UNSET: GeneratorId = GeneratorId::MAX;

/// Regular lattice of owner slots covering all generators
///
/// Cell `(x, y)` lives at `x + y * count_x`. The grid stores generator ids,
/// not generators: it is a lookup relation into the generator buffer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Grid {
    pub count_x: usize,
    pub count_y: usize,
    pub owners: Vec<GeneratorId>,
}

impl Grid {
    /// Size the grid from the generators' bounds and rewrite every generator
    /// center into grid-local units
    ///
    /// # Errors
    ///
    /// - `NoGenerators` if `generators` is empty
    /// - `InvalidConfig` if the grid would exceed `config.max_cells`
    pub fn allocate(generators: &mut [Generator], config: &DiagramConfig) -> Result<Self> {
        config.validate()?;
        if generators.is_empty() {
            return Err(VoronoiError::NoGenerators);
        }

        let inv_radius = 1.0 / config.radius;
        let (lower, upper) = bounds(generators);
        let span = (upper - lower) * inv_radius;
        if !span.is_finite() {
            return Err(VoronoiError::InvalidConfig(format!(
                "grid extent {} is not representable with radius {}",
                upper - lower,
                config.radius
            )));
        }

        // Non-negative span, so the cast floors (and saturates on overflow)
        let count_x = (span.x as usize).saturating_add(1);
        let count_y = (span.y as usize).saturating_add(1);
        let cells = count_x
            .checked_mul(count_y)
            .filter(|&cells| cells <= config.max_cells)
            .ok_or_else(|| {
                VoronoiError::InvalidConfig(format!(
                    "grid of {}x{} cells exceeds the limit of {} cells",
                    count_x, count_y, config.max_cells
                ))
            })?;

        for generator in generators.iter_mut() {
            generator.center = (generator.center - lower) * inv_radius;
        }

        debug!(lower = %lower, upper = %upper, "generator bounds");
        Ok(Self {
            count_x,
            count_y,
            owners: vec![UNSET; cells],
        })
    }

    #[inline]
    pub fn cell_index(&self, x: usize, y: usize) -> usize {
        x + y * self.count_x
    }

    #[inline]
    pub fn cell_count(&self) -> usize {
        self.owners.len()
    }

    /// Cell containing a grid-local coordinate, clamped into the grid
    #[inline]
    pub fn cell_of(&self, center: Vec2) -> (usize, usize) {
        let x = (center.x.max(0.0) as usize).min(self.count_x - 1);
        let y = (center.y.max(0.0) as usize).min(self.count_y - 1);
        (x, y)
    }

    #[inline]
    pub fn owner(&self, x: usize, y: usize) -> GeneratorId {
        self.owners[self.cell_index(x, y)]
    }

    /// Check that every cell has an owner
    pub fn is_complete(&self) -> bool {
        self.owners.iter().all(|&owner| owner != UNSET)
    }
}

/// Component-wise minimum and maximum over generator centers
fn bounds(generators: &[Generator]) -> (Vec2, Vec2) {
    generators.iter().fold(
        (Vec2::splat(f32::MAX), Vec2::splat(f32::MIN)),
        |(lower, upper), g| (lower.min(g.center), upper.max(g.center)),
    )
}
