//! Error types for grid voronoi construction

use thiserror::Error;

/// Errors that can occur while building or generating a diagram
///
/// Every variant is raised at the API boundary (`add_generator`, `generate`
/// or the config builder). Once generation starts with valid input it runs
/// to completion.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VoronoiError {
    /// A generator was added to a diagram that is already full
    #[error("generator capacity exceeded (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// A generator position could not be used (NaN or infinite)
    #[error("invalid generator: {0}")]
    InvalidGenerator(String),

    /// Configuration validation failed
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `generate` was called on a diagram without generators
    #[error("diagram has no generators")]
    NoGenerators,

    /// The diagram was already generated and is now immutable
    #[error("diagram has already been generated")]
    AlreadyGenerated,
}

/// Result type alias for diagram operations
pub type Result<T> = std::result::Result<T, VoronoiError>;
