//! simplified silhouette coefficient over labeled points

use num_traits::float::Float;

use std::collections::HashMap;
use std::fmt::Debug;

use crate::kmeans::{FeaturePair, LabeledPoint};

/// Mean silhouette of a clustering, computed over the selected feature pair.
///
/// Per point p : a(p) is the mean distance to the other members of p's
/// cluster, b(p) the smallest mean distance to the members of any *other*
/// cluster, and p scores (b - a) / max(a, b). A point alone in its cluster,
/// or with no other cluster to compare against, is skipped rather than scored
/// as zero. The returned value is the mean over scored points, 0. when no
/// point could be scored (empty input, single global cluster).
///
/// The feature indices must be valid for every labeled point; the partitioner
/// output always satisfies this.
pub fn silhouette_score<T>(labeled_points: &[LabeledPoint<T>], features: FeaturePair) -> f64
where
    T: Float + Debug,
{
    if labeled_points.is_empty() {
        return 0.;
    }
    let xy: Vec<[f64; 2]> = labeled_points
        .iter()
        .map(|lp| {
            let p = lp.get_point().select(features);
            [p[0].to_f64().unwrap(), p[1].to_f64().unwrap()]
        })
        .collect();
    // point indices grouped by cluster
    let mut members = HashMap::<usize, Vec<usize>>::new();
    for (i, lp) in labeled_points.iter().enumerate() {
        members.entry(lp.get_cluster()).or_default().push(i);
    }
    //
    let mut total = 0.;
    let mut scored = 0usize;
    for (i, lp) in labeled_points.iter().enumerate() {
        let own = lp.get_cluster();
        // mean distance to the rest of one's own cluster
        let mates = &members[&own];
        if mates.len() < 2 {
            continue;
        }
        let a = mates
            .iter()
            .filter(|&&j| j != i)
            .map(|&j| distance(&xy[i], &xy[j]))
            .sum::<f64>()
            / (mates.len() - 1) as f64;
        // nearest other cluster by mean distance
        let b = members
            .iter()
            .filter(|&(&cluster, _)| cluster != own)
            .map(|(_, others)| {
                others.iter().map(|&j| distance(&xy[i], &xy[j])).sum::<f64>()
                    / others.len() as f64
            })
            .fold(f64::INFINITY, f64::min);
        if !b.is_finite() {
            // single global cluster, nothing to separate from
            continue;
        }
        total += (b - a) / a.max(b);
        scored += 1;
    }
    if scored == 0 { 0. } else { total / scored as f64 }
} // end of silhouette_score

fn distance(a: &[f64; 2], b: &[f64; 2]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

//========================================================================

// end of mod tests
