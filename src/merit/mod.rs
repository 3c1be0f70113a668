//! This module is dedicated to metrics related to clustering merit.
//!
//! [`silhouette_score`] contrasts intra-cluster cohesion against separation
//! from the nearest other cluster, averaged over scoreable points, giving a
//! value in [-1, 1]. [`sweep_k`] profiles that score across a range of
//! candidate cluster counts.

pub mod silhouette;
pub mod sweep;

pub use silhouette::silhouette_score;
pub use sweep::{KMerit, sweep_k};
