//! Generator registry
//!
//! Seed points around which the grid is partitioned, stored in a buffer whose
//! capacity is fixed when the diagram is created.

use glam::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoronoiError};

/// Index of a generator in its buffer
///
/// Generators are identified by insertion order, never by value: two
/// generators at the same position are still distinct.
pub type GeneratorId = u32;

/// A single seed point
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Generator {
    /// Position as supplied by the caller, in world units
    pub position: Vec2,

    /// Working coordinate
    ///
    /// Equal to `position` until the diagram is generated, then expressed in
    /// grid-local units (`(position - lower) / radius`).
    pub center: Vec2,

    /// Opaque caller value echoed back by the triangle extractor
    pub tag: i32,
}

impl Generator {
    /// Create a generator whose working center is its world position
    pub fn new(position: Vec2, tag: i32) -> Self {
        Self {
            position,
            center: position,
            tag,
        }
    }

    /// Squared distance from the working center to a grid coordinate
    #[inline]
    pub(crate) fn distance_squared_to(&self, x: f32, y: f32) -> f32 {
        let dx = self.center.x - x;
        let dy = self.center.y - y;
        dx * dx + dy * dy
    }
}

/// Fixed-capacity, append-only list of generators
#[derive(Debug, Clone)]
pub struct GeneratorBuffer {
    generators: Vec<Generator>,
    capacity: usize,
}

impl GeneratorBuffer {
    /// Create an empty buffer that accepts at most `capacity` generators
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            generators: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a generator at the next free slot
    ///
    /// # Errors
    ///
    /// - `CapacityExceeded` if the buffer is full; the buffer is left unchanged
    /// - `InvalidGenerator` if the position is NaN or infinite
    pub fn push(&mut self, position: Vec2, tag: i32) -> Result<GeneratorId> {
        if self.generators.len() >= self.capacity {
            return Err(VoronoiError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        if !position.is_finite() {
            return Err(VoronoiError::InvalidGenerator(format!(
                "position {} of tag {} is not finite",
                position, tag
            )));
        }

        let id = self.generators.len() as GeneratorId;
        self.generators.push(Generator::new(position, tag));
        Ok(id)
    }

    /// Maximum number of generators
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of generators added so far
    #[inline]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    /// Check if no generator was added
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Get a generator by id
    #[inline]
    pub fn get(&self, id: GeneratorId) -> Option<&Generator> {
        self.generators.get(id as usize)
    }

    /// All generators in insertion order
    #[inline]
    pub fn as_slice(&self) -> &[Generator] {
        &self.generators
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Generator] {
        &mut self.generators
    }
}
