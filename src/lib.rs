//! Grid-discretized Voronoi partitioning
//!
//! Partitions a regular grid covering a set of 2D generators so that each
//! cell belongs (approximately) to its nearest generator, then reports the
//! triangles of generators whose cells meet. Particle systems use those
//! triangles to build three-particle (triad) constraints.
//!
//! # Quick Start
//!
//! ```rust
//! use grid_voronoi::*;
//!
//! let mut diagram = VoronoiDiagram::with_capacity(3);
//! diagram.add_generator(Vec2::new(0.0, 0.0), 1).unwrap();
//! diagram.add_generator(Vec2::new(4.0, 0.0), 2).unwrap();
//! diagram.add_generator(Vec2::new(2.0, 4.0), 3).unwrap();
//!
//! diagram.generate(1.0).unwrap();
//!
//! for triangle in diagram.triangles() {
//!     println!("{:?}", triangle.tags());
//! }
//! ```
//!
//! # Algorithm
//!
//! 1. Size a grid over the generators' bounding box with cells of `radius`
//! 2. Flood fill from every generator's cell to give each cell an owner
//! 3. Relax: wherever neighbouring cells disagree, move cells to a strictly
//!    closer generator until nothing changes (or the round budget ends)
//! 4. Scan 2×2 blocks for three distinct owners
//!
//! The result is an approximation, not an exact Voronoi diagram.
//!
//! # Features
//!
//! - `spatial-index` (default): Enables `VoronoiDiagram::validate_ownership` using a KD-tree
//! - `serde`: Enables serialization support for configuration and outputs

// Modules
pub mod error;
pub mod config;
pub mod generator;
pub mod generation;
pub mod triangles;
pub mod diagram;
pub mod scatter;

#[cfg(feature = "spatial-index")]
pub mod spatial;

// Re-export core types for convenience
pub use error::{VoronoiError, Result};
pub use config::{DiagramConfig, DiagramConfigBuilder};
pub use generator::{Generator, GeneratorBuffer, GeneratorId};
pub use generation::GenerateStats;
pub use triangles::Triangle;
pub use diagram::VoronoiDiagram;

#[cfg(feature = "spatial-index")]
pub use spatial::{OwnershipReport, SpatialIndex};

// Re-export glam::Vec2 for convenience
pub use glam::Vec2;
