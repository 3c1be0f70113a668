//! silhouette profile across a range of cluster counts

use num_traits::float::Float;

use std::fmt::Debug;
use std::ops::RangeInclusive;

use rand::Rng;

use super::silhouette::silhouette_score;
use crate::error::Result;
use crate::kmeans::{FeaturePair, KMeans, Point};

/// Merit of one candidate cluster count.
#[derive(Debug, Copy, Clone)]
pub struct KMerit {
    /// number of clusters asked for
    pub k: usize,
    /// mean silhouette of the run
    pub silhouette: f64,
    /// iterations the run needed
    pub iterations_used: usize,
}

/// Run the partitioner once per `k` in `k_range` and score each run.
///
/// Each run starts from a fresh random initialization drawn from `rng`, so
/// the profile is itself an estimate; callers picking an "optimal" k from a
/// single sweep inherit the usual local-optimum caveat.
pub fn sweep_k<T, R>(
    points: &[Point<T>],
    k_range: RangeInclusive<usize>,
    max_iterations: usize,
    features: FeaturePair,
    rng: &mut R,
) -> Result<Vec<KMerit>>
where
    T: Float + Debug,
    R: Rng,
{
    let mut profile = Vec::with_capacity(k_range.end().saturating_sub(*k_range.start()) + 1);
    for k in k_range {
        let res = KMeans::new(k, max_iterations, features).cluster(points, rng)?;
        let silhouette = silhouette_score(res.get_labeled_points(), features);
        log::info!(
            "k = {}, silhouette = {:.3}, iterations = {}",
            k,
            silhouette,
            res.get_iterations_used()
        );
        profile.push(KMerit {
            k,
            silhouette,
            iterations_used: res.get_iterations_used(),
        });
    }
    Ok(profile)
} // end of sweep_k

//========================================================================

// end of mod tests
