//! Lloyd iterations with jittered random initialization.

use num_traits::float::Float;

use std::fmt::Debug;

use rand::Rng;

use super::point::{FeaturePair, LabeledPoint, Point};
use crate::error::{Error, Result};

// a centroid coordinate moving less than this (in feature units) counts as stable
const CONVERGENCE_THRESHOLD: f64 = 0.1;

// default jitter amplitude applied to sampled initial centroids, per axis.
// Sized for the mall dataset's income (x) and spending score (y) ranges.
const DEFAULT_JITTER: (f64, f64) = (2.5, 5.0);

/// A synthetic position in the selected 2-d feature plane, mean of the points
/// currently assigned to one cluster. Carries no point id.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Centroid<T> {
    p: [T; 2],
}

impl<T> Centroid<T>
where
    T: Float + Debug,
{
    pub fn new(x: T, y: T) -> Self {
        Centroid { p: [x, y] }
    }

    /// gets the centroid coordinates in (x feature, y feature) order
    pub fn get_position(&self) -> &[T; 2] {
        &self.p
    }
} // end of impl Centroid

//====

/// Outcome of one clustering run. Immutable; labels are guaranteed consistent
/// with the centroids (a final assignment pass runs after the last update).
#[derive(Debug, Clone)]
pub struct ClusteringResult<T> {
    labeled_points: Vec<LabeledPoint<T>>,
    // exactly k centroids, possibly some with no assigned point
    centroids: Vec<Centroid<T>>,
    iterations_used: usize,
}

impl<T> ClusteringResult<T>
where
    T: Float + Debug,
{
    /// every input point, with its assigned cluster index in [0, k)
    pub fn get_labeled_points(&self) -> &[LabeledPoint<T>] {
        &self.labeled_points
    }

    /// final centroids, one per requested cluster even if a cluster is empty
    pub fn get_centroids(&self) -> &[Centroid<T>] {
        &self.centroids
    }

    /// number of assign/update iterations actually performed (<= budget)
    pub fn get_iterations_used(&self) -> usize {
        self.iterations_used
    }

    /// number of points assigned to each cluster index.
    /// Entries may be 0 : an empty cluster keeps its stale centroid.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.centroids.len()];
        for lp in &self.labeled_points {
            sizes[lp.get_cluster()] += 1;
        }
        sizes
    }

    /// mean position of the points of one cluster over the selected features,
    /// None if the cluster is empty
    pub fn cluster_mean(&self, cluster: usize, features: FeaturePair) -> Option<[T; 2]> {
        let mut sum = [T::zero(), T::zero()];
        let mut count = 0usize;
        for lp in &self.labeled_points {
            if lp.get_cluster() == cluster {
                let xy = lp.get_point().select(features);
                sum[0] = sum[0] + xy[0];
                sum[1] = sum[1] + xy[1];
                count += 1;
            }
        }
        if count == 0 {
            return None;
        }
        let n = T::from(count).unwrap();
        Some([sum[0] / n, sum[1] / n])
    }
} // end of impl ClusteringResult

//====

/// K-Means driver.
///
/// Holds the run parameters; [`KMeans::cluster`] borrows the points and the
/// random source, so one configured driver can be reused across runs.
#[derive(Debug, Copy, Clone)]
pub struct KMeans {
    // number of clusters asked for
    k: usize,
    // iteration budget
    max_iterations: usize,
    // which two features distances are computed over
    features: FeaturePair,
    // jitter amplitude on (x, y) at initialization
    jitter: (f64, f64),
}

impl KMeans {
    pub fn new(k: usize, max_iterations: usize, features: FeaturePair) -> Self {
        KMeans {
            k,
            max_iterations,
            features,
            jitter: DEFAULT_JITTER,
        }
    }

    /// override the initialization jitter amplitudes, in feature units.
    /// Callers clustering feature pairs with very different ranges should
    /// rescale these.
    pub fn with_jitter(mut self, jitter_x: f64, jitter_y: f64) -> Self {
        self.jitter = (jitter_x, jitter_y);
        self
    }

    /// Partition `points` into `k` clusters.
    ///
    /// Initial centroids are sampled from the data (with replacement) and
    /// jittered, so two calls with the same input may return different local
    /// optima. Within a run everything is deterministic: nearest-centroid ties
    /// go to the lowest centroid index, and a cluster left without points
    /// keeps its previous centroid unchanged.
    pub fn cluster<T, R>(&self, points: &[Point<T>], rng: &mut R) -> Result<ClusteringResult<T>>
    where
        T: Float + Debug,
        R: Rng,
    {
        if points.is_empty() {
            return Err(Error::EmptyPointSet);
        }
        if self.k == 0 {
            return Err(Error::InvalidClusterCount(self.k));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidIterationBudget(self.max_iterations));
        }
        let xy = project(points, self.features)?;
        //
        let centroids = init_centroids(&xy, self.k, self.jitter, rng);
        let (centroids, iterations_used) = lloyd(&xy, centroids, self.max_iterations);
        // final pass so that returned labels always match returned centroids
        let labels = assign(&xy, &centroids);
        let labeled_points = points
            .iter()
            .zip(labels)
            .map(|(p, c)| LabeledPoint::new(p.clone(), c))
            .collect();
        //
        Ok(ClusteringResult {
            labeled_points,
            centroids,
            iterations_used,
        })
    }
} // end of impl KMeans

/// One-shot entry point with a thread-local random source and default jitter.
pub fn run_clustering<T>(
    points: &[Point<T>],
    k: usize,
    max_iterations: usize,
    features: FeaturePair,
) -> Result<ClusteringResult<T>>
where
    T: Float + Debug,
{
    KMeans::new(k, max_iterations, features).cluster(points, &mut rand::rng())
}

//====

// project every point on the selected feature pair, checking dimensions
fn project<T>(points: &[Point<T>], features: FeaturePair) -> Result<Vec<[T; 2]>>
where
    T: Float + Debug,
{
    let needed = features.x.max(features.y);
    for point in points {
        if point.get_dimension() <= needed {
            return Err(Error::FeatureOutOfRange {
                feature: needed,
                dim: point.get_dimension(),
            });
        }
    }
    Ok(points.iter().map(|p| p.select(features)).collect())
}

// sample k points uniformly with replacement and perturb them so centroids do
// not start exactly on data points
fn init_centroids<T, R>(xy: &[[T; 2]], k: usize, jitter: (f64, f64), rng: &mut R) -> Vec<Centroid<T>>
where
    T: Float + Debug,
    R: Rng,
{
    (0..k)
        .map(|_| {
            let picked = xy[rng.random_range(0..xy.len())];
            let dx = T::from(rng.random_range(-jitter.0..=jitter.0)).unwrap();
            let dy = T::from(rng.random_range(-jitter.1..=jitter.1)).unwrap();
            Centroid::new(picked[0] + dx, picked[1] + dy)
        })
        .collect()
}

// assignment step : index of the nearest centroid for every point.
// Strict less-than over increasing centroid index, so ties go to the lowest index.
fn assign<T>(xy: &[[T; 2]], centroids: &[Centroid<T>]) -> Vec<usize>
where
    T: Float + Debug,
{
    xy.iter()
        .map(|point| {
            let mut min_dist = T::infinity();
            let mut cluster = 0usize;
            for (index, centroid) in centroids.iter().enumerate() {
                let d = distance(point, centroid.get_position());
                if d < min_dist {
                    min_dist = d;
                    cluster = index;
                }
            }
            cluster
        })
        .collect()
}

// update step : mean of assigned points, previous centroid kept for an empty cluster
fn update<T>(xy: &[[T; 2]], labels: &[usize], previous: &[Centroid<T>]) -> Vec<Centroid<T>>
where
    T: Float + Debug,
{
    let k = previous.len();
    let mut sums = vec![[T::zero(), T::zero()]; k];
    let mut counts = vec![0usize; k];
    for (point, &cluster) in xy.iter().zip(labels) {
        sums[cluster][0] = sums[cluster][0] + point[0];
        sums[cluster][1] = sums[cluster][1] + point[1];
        counts[cluster] += 1;
    }
    (0..k)
        .map(|i| {
            if counts[i] == 0 {
                previous[i]
            } else {
                let n = T::from(counts[i]).unwrap();
                Centroid::new(sums[i][0] / n, sums[i][1] / n)
            }
        })
        .collect()
}

// every coordinate of every centroid moved less than the threshold
fn has_converged<T>(previous: &[Centroid<T>], current: &[Centroid<T>]) -> bool
where
    T: Float + Debug,
{
    let threshold = T::from(CONVERGENCE_THRESHOLD).unwrap();
    previous.iter().zip(current).all(|(old, new)| {
        let old = old.get_position();
        let new = new.get_position();
        (old[0] - new[0]).abs() < threshold && (old[1] - new[1]).abs() < threshold
    })
}

// alternate assignment and update until convergence or budget exhaustion,
// returning the final centroids and the number of iterations performed
fn lloyd<T>(
    xy: &[[T; 2]],
    mut centroids: Vec<Centroid<T>>,
    max_iterations: usize,
) -> (Vec<Centroid<T>>, usize)
where
    T: Float + Debug,
{
    let mut iterations = 0usize;
    while iterations < max_iterations {
        let labels = assign(xy, &centroids);
        let new_centroids = update(xy, &labels, &centroids);
        let converged = has_converged(&centroids, &new_centroids);
        centroids = new_centroids;
        iterations += 1;
        if converged {
            log::debug!("lloyd converged after {} iterations", iterations);
            break;
        }
    }
    (centroids, iterations)
}

fn distance<T>(a: &[T; 2], b: &[T; 2]) -> T
where
    T: Float + Debug,
{
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

//========================================================================

#[cfg(test)]
mod tests {

    use super::*;

    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn log_init_test() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn four_corners() -> Vec<Point<f64>> {
        vec![
            Point::new(0, vec![0., 0.]),
            Point::new(1, vec![0., 1.]),
            Point::new(2, vec![50., 50.]),
            Point::new(3, vec![50., 51.]),
        ]
    }

    #[test]
    fn check_result_shape() {
        log_init_test();
        //
        let points = crate::dataset::mall_customers();
        let features = crate::dataset::INCOME_SPENDING;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(12345);
        let kmeans = KMeans::new(4, 10, features);
        let res = kmeans.cluster(&points, &mut rng).unwrap();
        //
        assert_eq!(res.get_labeled_points().len(), points.len());
        assert_eq!(res.get_centroids().len(), 4);
        assert!(res.get_iterations_used() >= 1 && res.get_iterations_used() <= 10);
        for lp in res.get_labeled_points() {
            assert!(lp.get_cluster() < 4);
        }
        // every input id appears exactly once (customer ids are 1-based)
        let mut seen = vec![false; points.len() + 1];
        for lp in res.get_labeled_points() {
            assert!(!seen[lp.get_id()]);
            seen[lp.get_id()] = true;
        }
        assert_eq!(res.cluster_sizes().iter().sum::<usize>(), points.len());
    } // end of check_result_shape

    #[test]
    fn check_final_assignment_idempotent() {
        log_init_test();
        //
        let points = crate::dataset::mall_customers();
        let features = crate::dataset::INCOME_SPENDING;
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(7);
        let res = KMeans::new(5, 15, features).cluster(&points, &mut rng).unwrap();
        // re-running only the assignment step against the returned centroids
        // must reproduce the returned labels exactly
        let xy = project(&points, features).unwrap();
        let labels = assign(&xy, res.get_centroids());
        for (lp, label) in res.get_labeled_points().iter().zip(&labels) {
            assert_eq!(lp.get_cluster(), *label);
        }
    } // end of check_final_assignment_idempotent

    #[test]
    fn check_tie_breaks_to_lowest_index() {
        log_init_test();
        // point equidistant from both centroids
        let xy = [[0.0f64, 0.0]];
        let centroids = vec![Centroid::new(1.0, 0.0), Centroid::new(-1.0, 0.0)];
        assert_eq!(assign(&xy, &centroids), vec![0]);
        // swapped order must flip the winner to the (new) lowest index
        let centroids = vec![Centroid::new(-1.0, 0.0), Centroid::new(1.0, 0.0)];
        assert_eq!(assign(&xy, &centroids), vec![0]);
    }

    #[test]
    fn check_invalid_arguments() {
        log_init_test();
        //
        let points = four_corners();
        let features = FeaturePair::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        //
        let empty: Vec<Point<f64>> = Vec::new();
        let res = KMeans::new(2, 10, features).cluster(&empty, &mut rng);
        assert!(matches!(res, Err(Error::EmptyPointSet)));
        //
        let res = KMeans::new(0, 10, features).cluster(&points, &mut rng);
        assert!(matches!(res, Err(Error::InvalidClusterCount(0))));
        //
        let res = KMeans::new(2, 0, features).cluster(&points, &mut rng);
        assert!(matches!(res, Err(Error::InvalidIterationBudget(0))));
        //
        let res = KMeans::new(2, 10, FeaturePair::new(0, 5)).cluster(&points, &mut rng);
        assert!(matches!(res, Err(Error::FeatureOutOfRange { feature: 5, .. })));
    } // end of check_invalid_arguments

    #[test]
    fn check_k_larger_than_point_set() {
        log_init_test();
        // tolerated : surplus clusters may stay permanently empty
        let points = four_corners();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let res = KMeans::new(6, 10, FeaturePair::default())
            .cluster(&points, &mut rng)
            .unwrap();
        assert_eq!(res.get_centroids().len(), 6);
        assert_eq!(res.get_labeled_points().len(), 4);
        for lp in res.get_labeled_points() {
            assert!(lp.get_cluster() < 6);
        }
    }

    #[test]
    fn check_separated_pairs_recovered() {
        log_init_test();
        // the two pairs are far more separated than any initialization jitter,
        // so every seed must recover them
        let points = four_corners();
        let features = FeaturePair::default();
        for seed in 0..30u64 {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            let res = KMeans::new(2, 20, features).cluster(&points, &mut rng).unwrap();
            let labels: Vec<usize> = res
                .get_labeled_points()
                .iter()
                .map(|lp| lp.get_cluster())
                .collect();
            assert_eq!(labels[0], labels[1], "seed {}", seed);
            assert_eq!(labels[2], labels[3], "seed {}", seed);
            assert_ne!(labels[0], labels[2], "seed {}", seed);
        }
    } // end of check_separated_pairs_recovered

    #[test]
    fn check_empty_cluster_keeps_centroid() {
        log_init_test();
        // centroid 2 starts far from all the data and never attracts a point :
        // it must keep its initial coordinates exactly across the whole run
        let points = four_corners();
        let xy = project(&points, FeaturePair::default()).unwrap();
        let dead = Centroid::new(1000.0, 1000.0);
        let centroids = vec![Centroid::new(1.0, 1.0), Centroid::new(49.0, 49.0), dead];
        let (finals, iterations) = lloyd(&xy, centroids, 20);
        assert_eq!(finals.len(), 3);
        assert_eq!(finals[2], dead);
        assert!(iterations <= 20);
        // and no point is assigned to it
        let labels = assign(&xy, &finals);
        assert!(labels.iter().all(|&c| c < 2));
    } // end of check_empty_cluster_keeps_centroid

    #[test]
    fn check_convergence_stops_early() {
        log_init_test();
        // centroids already at the cluster means : one pass must be enough
        let points = four_corners();
        let xy = project(&points, FeaturePair::default()).unwrap();
        let centroids = vec![Centroid::new(0.0, 0.5), Centroid::new(50.0, 50.5)];
        let (finals, iterations) = lloyd(&xy, centroids, 20);
        assert_eq!(iterations, 1);
        assert_eq!(finals[0], Centroid::new(0.0, 0.5));
        assert_eq!(finals[1], Centroid::new(50.0, 50.5));
    }

    #[test]
    fn check_cluster_mean() {
        log_init_test();
        //
        let points = four_corners();
        let features = FeaturePair::default();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(11);
        let res = KMeans::new(2, 20, features).cluster(&points, &mut rng).unwrap();
        let c0 = res.get_labeled_points()[0].get_cluster();
        let mean = res.cluster_mean(c0, features).unwrap();
        assert!((mean[0] - 0.0).abs() < 1e-12);
        assert!((mean[1] - 0.5).abs() < 1e-12);
        // an out-of-range or empty cluster has no mean
        assert!(res.cluster_mean(5, features).is_none());
    }
} // end of mod tests
