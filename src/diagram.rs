//! VoronoiDiagram main structure

use glam::Vec2;
use tracing::debug;

use crate::config::DiagramConfig;
use crate::error::{Result, VoronoiError};
use crate::generation::{generate_grid, GenerateStats, Grid};
use crate::generator::{Generator, GeneratorBuffer, GeneratorId};
use crate::triangles::{self, Triangle};

#[cfg(feature = "spatial-index")]
use crate::spatial::{OwnershipReport, SpatialIndex};

/// Lifecycle of a diagram: generators are added while `Building`, and the
/// grid exists only once `Built`
#[derive(Debug, Clone)]
enum DiagramState {
    Building,
    Built { grid: Grid, stats: GenerateStats },
}

/// Grid-discretized Voronoi partition of a set of generators
///
/// Created with a fixed generator capacity, filled with `add_generator`,
/// generated exactly once, then queried for triangle adjacency.
///
/// # Examples
///
/// ```
/// use grid_voronoi::*;
///
/// let mut diagram = VoronoiDiagram::with_capacity(3);
/// diagram.add_generator(Vec2::new(0.0, 0.0), 1).unwrap();
/// diagram.add_generator(Vec2::new(4.0, 0.0), 2).unwrap();
/// diagram.add_generator(Vec2::new(2.0, 4.0), 3).unwrap();
///
/// diagram.generate(1.0).unwrap();
///
/// let mut found = Vec::new();
/// diagram.get_nodes(|a, b, c| found.push([a, b, c]));
/// assert!(!found.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct VoronoiDiagram {
    generators: GeneratorBuffer,
    state: DiagramState,
}

impl VoronoiDiagram {
    /// Create an empty diagram that accepts at most `capacity` generators
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            generators: GeneratorBuffer::with_capacity(capacity),
            state: DiagramState::Building,
        }
    }

    /// Add a generator at `center` carrying the caller's `tag`
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if the diagram is full
    /// - `InvalidGenerator` if `center` is not finite
    /// - `AlreadyGenerated` if `generate` has already run
    pub fn add_generator(&mut self, center: Vec2, tag: i32) -> Result<GeneratorId> {
        if self.is_generated() {
            return Err(VoronoiError::AlreadyGenerated);
        }
        self.generators.push(center, tag)
    }

    /// Partition the grid with cells of size `radius`
    ///
    /// Shorthand for `generate_with_config` with default limits.
    ///
    /// # Errors
    ///
    /// - `InvalidConfig` if radius is not a positive finite number
    /// - `NoGenerators` if no generator was added
    /// - `AlreadyGenerated` if called a second time
    pub fn generate(&mut self, radius: f32) -> Result<()> {
        let config = DiagramConfig::new(radius)?;
        self.generate_with_config(&config)
    }

    /// Partition the grid using a full configuration
    ///
    /// Generator centers are rewritten into grid-local units; world positions
    /// stay available through `Generator::position`.
    ///
    /// # Errors
    ///
    /// Same as `generate`, plus `InvalidConfig` if the grid would exceed
    /// `config.max_cells`. On error the diagram is left unchanged.
    pub fn generate_with_config(&mut self, config: &DiagramConfig) -> Result<()> {
        if self.is_generated() {
            return Err(VoronoiError::AlreadyGenerated);
        }

        let (grid, stats) = generate_grid(self.generators.as_mut_slice(), config)?;
        debug!(
            cells = stats.cell_count(),
            rounds = stats.relaxation_rounds,
            converged = stats.converged,
            "diagram generated"
        );
        self.state = DiagramState::Built { grid, stats };
        Ok(())
    }

    /// Check if `generate` has completed
    #[inline]
    pub fn is_generated(&self) -> bool {
        matches!(self.state, DiagramState::Built { .. })
    }

    /// Maximum number of generators
    #[inline]
    pub fn capacity(&self) -> usize {
        self.generators.capacity()
    }

    /// Number of generators added
    #[inline]
    pub fn generator_count(&self) -> usize {
        self.generators.len()
    }

    /// All generators in insertion order
    #[inline]
    pub fn generators(&self) -> &[Generator] {
        self.generators.as_slice()
    }

    /// Statistics of the generation run, if generated
    #[inline]
    pub fn stats(&self) -> Option<&GenerateStats> {
        match &self.state {
            DiagramState::Built { stats, .. } => Some(stats),
            DiagramState::Building => None,
        }
    }

    #[inline]
    fn grid(&self) -> Option<&Grid> {
        match &self.state {
            DiagramState::Built { grid, .. } => Some(grid),
            DiagramState::Building => None,
        }
    }

    /// Report every triangle of mutually adjacent generators
    ///
    /// `callback` receives the three generators' tags. The scan order is
    /// fixed, so repeated calls produce the same sequence. Emits nothing
    /// before `generate`.
    pub fn get_nodes<F>(&self, callback: F)
    where
        F: FnMut(i32, i32, i32),
    {
        if let Some(grid) = self.grid() {
            triangles::extract(grid, self.generators.as_slice(), callback, |_, _, _| true);
        }
    }

    /// Like `get_nodes`, but skip triangles with a long edge
    ///
    /// A triangle is reported only if every pair of its generators is closer
    /// than `max_edge` in world space.
    ///
    /// # Example
    ///
    /// ```
    /// use grid_voronoi::*;
    ///
    /// let mut diagram = VoronoiDiagram::with_capacity(3);
    /// diagram.add_generator(Vec2::new(0.0, 0.0), 1).unwrap();
    /// diagram.add_generator(Vec2::new(4.0, 0.0), 2).unwrap();
    /// diagram.add_generator(Vec2::new(2.0, 4.0), 3).unwrap();
    /// diagram.generate(1.0).unwrap();
    ///
    /// let mut count = 0;
    /// diagram.get_nodes_within(2.0, |_, _, _| count += 1);
    /// assert_eq!(count, 0);
    /// ```
    pub fn get_nodes_within<F>(&self, max_edge: f32, callback: F)
    where
        F: FnMut(i32, i32, i32),
    {
        let Some(grid) = self.grid() else {
            return;
        };
        let generators = self.generators.as_slice();
        let max_d2 = max_edge * max_edge;
        let close = |p: GeneratorId, q: GeneratorId| {
            generators[p as usize]
                .position
                .distance_squared(generators[q as usize].position)
                < max_d2
        };
        triangles::extract(grid, generators, callback, |a, b, c| {
            close(a, b) && close(b, c) && close(c, a)
        });
    }

    /// Collect every triangle reported by `get_nodes`
    pub fn triangles(&self) -> Vec<Triangle> {
        let mut out = Vec::new();
        self.get_nodes(|a, b, c| out.push(Triangle::new(a, b, c)));
        out
    }

    /// Compare the grid against exact nearest-generator ownership
    ///
    /// Returns `None` before `generate`.
    #[cfg(feature = "spatial-index")]
    pub fn validate_ownership(&self) -> Option<OwnershipReport> {
        let grid = self.grid()?;
        let centers: Vec<Vec2> = self.generators().iter().map(|g| g.center).collect();
        let index = SpatialIndex::new(&centers);
        Some(index.check_grid(grid, self.generators()))
    }
}
