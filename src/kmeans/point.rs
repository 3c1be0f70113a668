//! defines data description

use num_traits::float::Float;

use std::fmt::Debug;

/// data to cluster identifier
pub type PointId = usize;

#[derive(Debug, Clone, PartialEq)]
pub struct Point<T> {
    // id to identify points as coming from external client.
    id: PointId,
    /// feature values
    p: Vec<T>,
}

impl<T> Point<T>
where
    T: Float + Debug,
{
    /// a point is characterized by its id and a feature vector of dimension >= 2
    pub fn new(id: PointId, p: Vec<T>) -> Self {
        Point { id, p }
    }

    /// get id
    pub fn get_id(&self) -> PointId {
        self.id
    }

    /// gets the point coordinates
    pub fn get_position(&self) -> &[T] {
        &self.p
    }

    pub fn get_dimension(&self) -> usize {
        self.p.len()
    }

    /// project on the two features selected for clustering
    pub(crate) fn select(&self, features: FeaturePair) -> [T; 2] {
        [self.p[features.x], self.p[features.y]]
    }
} // end of impl Point

//====

/// Indices of the two point features distances are computed over.
///
/// For the mall customer dataset the conventional choice is
/// [`crate::dataset::INCOME_SPENDING`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FeaturePair {
    /// index of the first (x) feature
    pub x: usize,
    /// index of the second (y) feature
    pub y: usize,
}

impl FeaturePair {
    pub fn new(x: usize, y: usize) -> Self {
        FeaturePair { x, y }
    }
}

impl Default for FeaturePair {
    /// the first two features of each point
    fn default() -> Self {
        FeaturePair { x: 0, y: 1 }
    }
}

//====

/// A point together with the cluster index it was assigned to.
/// Built fresh on every clustering run, never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledPoint<T> {
    point: Point<T>,
    // in [0, k)
    cluster: usize,
}

impl<T> LabeledPoint<T>
where
    T: Float + Debug,
{
    pub fn new(point: Point<T>, cluster: usize) -> Self {
        LabeledPoint { point, cluster }
    }

    /// get the assigned cluster index
    pub fn get_cluster(&self) -> usize {
        self.cluster
    }

    pub fn get_point(&self) -> &Point<T> {
        &self.point
    }

    /// id of the underlying point
    pub fn get_id(&self) -> PointId {
        self.point.get_id()
    }
} // end of impl LabeledPoint
