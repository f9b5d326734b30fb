//! Error types for index construction.

use thiserror::Error;

/// Errors that can occur while building a [`KDBush`](crate::KDBush).
///
/// Queries on a built index never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Node size must be at least 1.
    #[error("invalid node size {0}: must be at least 1")]
    InvalidNodeSize(usize),

    /// Point ids are stored as `u32`.
    #[error("too many points: {0} exceeds the u32 id range")]
    TooManyPoints(usize),

    /// A coordinate was NaN or infinite.
    #[error("point {id} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Input index of the offending point.
        id: usize,
    },
}
