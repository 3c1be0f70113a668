use thiserror::Error;

/// Errors surfaced by the partitioner and the dataset loader.
///
/// Empty clusters, unscoreable points in merit computation and distance ties
/// are resolved internally by fixed policies and are never reported as errors.
#[derive(Debug, Error)]
pub enum Error {
    /// The point set to cluster is empty.
    #[error("empty point set")]
    EmptyPointSet,

    /// Requested number of clusters is not usable (currently only 0).
    #[error("invalid cluster count: {0}")]
    InvalidClusterCount(usize),

    /// The iteration budget must be at least 1.
    #[error("invalid iteration budget: {0}")]
    InvalidIterationBudget(usize),

    /// A selected feature index does not exist in some point.
    #[error("feature index {feature} out of range for point of dimension {dim}")]
    FeatureOutOfRange {
        /// Offending feature index.
        feature: usize,
        /// Dimension of the point that was too short.
        dim: usize,
    },

    /// Error while reading customer records from csv.
    #[error("csv read error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
