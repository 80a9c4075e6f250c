//! Diagram configuration and builder
//!
//! The only tunable the algorithm needs is the grid cell scale (`radius`).
//! The remaining fields bound the work `generate` may do.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// Spacing between neighbouring particles as a fraction of their diameter
///
/// Particle groups are laid out on a lattice with this stride, and the
/// diagram is generated with half the stride as its cell scale.
pub const PARTICLE_STRIDE: f32 = 0.75;

/// Longest triangle edge, in particle diameters, that still forms a triad
pub const MAX_TRIAD_DISTANCE: f32 = 2.0;

/// Default upper bound on `count_x * count_y`
pub const DEFAULT_MAX_CELLS: usize = 1 << 24;

/// Grid cell scale for a particle group of the given diameter
#[inline]
pub fn particle_radius(particle_diameter: f32) -> f32 {
    particle_diameter * PARTICLE_STRIDE * 0.5
}

/// Longest world-space triangle edge accepted for particles of the given diameter
///
/// Pass the result to `VoronoiDiagram::get_nodes_within`.
#[inline]
pub fn triad_edge_limit(particle_diameter: f32) -> f32 {
    MAX_TRIAD_DISTANCE * particle_diameter
}

/// Configuration for diagram generation
///
/// # Example
///
/// ```rust
/// use grid_voronoi::*;
///
/// let config = DiagramConfigBuilder::new()
///     .radius(0.5)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.radius, 0.5);
/// assert_eq!(config.relaxation_round_limit(10, 4), 14);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiagramConfig {
    /// Size of one grid cell in world units
    ///
    /// Smaller values give a finer partition at the cost of memory and
    /// relaxation time.
    pub radius: f32,

    /// Override for the relaxation round budget
    ///
    /// `None` uses `count_x + count_y`, enough for a correction to travel
    /// across the whole grid.
    pub max_relaxation_rounds: Option<usize>,

    /// Largest grid (in cells) `generate` is allowed to allocate
    pub max_cells: usize,
}

impl DiagramConfig {
    /// Create a configuration with the given cell scale and default limits
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius is not a positive finite number
    pub fn new(radius: f32) -> Result<Self> {
        DiagramConfigBuilder::new().radius(radius)?.build()
    }

    /// Number of relaxation rounds allowed for a grid of the given size
    #[inline]
    pub fn relaxation_round_limit(&self, count_x: usize, count_y: usize) -> usize {
        self.max_relaxation_rounds.unwrap_or(count_x + count_y)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_radius(self.radius)?;
        if self.max_cells == 0 {
            return Err(VoronoiError::InvalidConfig(
                "max cells must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            max_relaxation_rounds: None,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

fn check_radius(radius: f32) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(VoronoiError::InvalidConfig(format!(
            "radius must be positive and finite (got {})",
            radius
        )));
    }
    Ok(())
}

/// Builder for creating DiagramConfig with validation
///
/// # Example
///
/// ```rust
/// use grid_voronoi::*;
///
/// // Cell scale derived from a particle diameter
/// let config = DiagramConfigBuilder::new()
///     .particle_diameter(1.0)
///     .unwrap()
///     .max_relaxation_rounds(8)
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert_eq!(config.radius, 0.375);
/// assert_eq!(config.max_relaxation_rounds, Some(8));
/// ```
#[derive(Debug, Clone)]
pub struct DiagramConfigBuilder {
    radius: f32,
    max_relaxation_rounds: Option<usize>,
    max_cells: usize,
}

impl DiagramConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - radius: 1.0
    /// - max_relaxation_rounds: None (`count_x + count_y`)
    /// - max_cells: `DEFAULT_MAX_CELLS`
    pub fn new() -> Self {
        let defaults = DiagramConfig::default();
        Self {
            radius: defaults.radius,
            max_relaxation_rounds: defaults.max_relaxation_rounds,
            max_cells: defaults.max_cells,
        }
    }

    /// Set the grid cell scale
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if radius <= 0.0 or is not finite
    pub fn radius(mut self, radius: f32) -> Result<Self> {
        check_radius(radius)?;
        self.radius = radius;
        Ok(self)
    }

    /// Derive the cell scale from a particle diameter
    ///
    /// Uses half the particle stride, matching how particle groups are laid out.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the resulting radius is not positive
    pub fn particle_diameter(self, diameter: f32) -> Result<Self> {
        self.radius(particle_radius(diameter))
    }

    /// Cap the number of relaxation rounds
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if rounds == 0
    pub fn max_relaxation_rounds(mut self, rounds: usize) -> Result<Self> {
        if rounds == 0 {
            return Err(VoronoiError::InvalidConfig(
                "relaxation rounds must be >= 1 (got 0)".to_string(),
            ));
        }
        self.max_relaxation_rounds = Some(rounds);
        Ok(self)
    }

    /// Set the largest grid `generate` may allocate
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if cells == 0
    pub fn max_cells(mut self, cells: usize) -> Result<Self> {
        if cells == 0 {
            return Err(VoronoiError::InvalidConfig(
                "max cells must be >= 1 (got 0)".to_string(),
            ));
        }
        self.max_cells = cells;
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> Result<DiagramConfig> {
        let config = DiagramConfig {
            radius: self.radius,
            max_relaxation_rounds: self.max_relaxation_rounds,
            max_cells: self.max_cells,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for DiagramConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builder_defaults() {
        let config = DiagramConfigBuilder::new().build().unwrap();
        assert_eq!(config, DiagramConfig::default());
        assert_eq!(config.max_cells, DEFAULT_MAX_CELLS);
    }

    #[test]
    fn test_builder_invalid_radius() {
        assert!(DiagramConfigBuilder::new().radius(0.0).is_err());
        assert!(DiagramConfigBuilder::new().radius(-5.0).is_err());
        assert!(DiagramConfigBuilder::new().radius(f32::NAN).is_err());
        assert!(DiagramConfigBuilder::new().radius(f32::INFINITY).is_err());
    }

    #[test]
    fn test_builder_zero_limits() {
        assert!(DiagramConfigBuilder::new().max_relaxation_rounds(0).is_err());
        assert!(DiagramConfigBuilder::new().max_cells(0).is_err());
    }

    #[test]
    fn test_round_limit() {
        let config = DiagramConfig::new(2.0).unwrap();
        assert_eq!(config.relaxation_round_limit(21, 1), 22);

        let capped = DiagramConfigBuilder::new()
            .max_relaxation_rounds(3)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(capped.relaxation_round_limit(21, 1), 3);
    }

    #[test]
    fn test_particle_helpers() {
        assert_relative_eq!(particle_radius(2.0), 0.75);
        assert_relative_eq!(triad_edge_limit(0.5), 1.0);

        let config = DiagramConfigBuilder::new()
            .particle_diameter(2.0)
            .unwrap()
            .build()
            .unwrap();
        assert_relative_eq!(config.radius, 0.75);
    }

    #[test]
    fn test_struct_literal_validation() {
        let config = DiagramConfig {
            radius: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = DiagramConfigBuilder::new()
            .radius(0.25)
            .unwrap()
            .max_relaxation_rounds(4)
            .unwrap()
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: DiagramConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
