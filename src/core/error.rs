//! Error types for the semantic octree

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    /// Table-based color aggregation asked for a class id that is not in
    /// the configured label-to-color table. A configuration error, not a
    /// recoverable runtime condition.
    #[error("no color mapping for semantic class {0}")]
    MissingClassMapping(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
