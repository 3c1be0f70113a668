//! Iterative centroid-based partitioning (K-Means, Lloyd iterations).
//!
//! Points carry an arbitrary number of numeric features; distances are always
//! computed over the two features selected by a [`FeaturePair`], so clustering
//! on income/spending, age/income ... is a caller choice, not an algorithm
//! concern.
//!
//! Initial centroids are sampled from the data with replacement and perturbed
//! by a small bounded jitter, then assignment and centroid-update steps
//! alternate until centroids move less than a fixed threshold or the iteration
//! budget runs out. A final assignment pass guarantees the returned labels are
//! consistent with the returned centroids.

pub mod partition;
pub mod point;

pub use partition::{Centroid, ClusteringResult, KMeans, run_clustering};
pub use point::{FeaturePair, LabeledPoint, Point, PointId};
