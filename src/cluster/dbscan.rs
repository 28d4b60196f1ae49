//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN groups points by neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies outliers
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: neighborhood radius; neighbors lie strictly closer
//!   than ε.
//! - **MinPts**: minimum neighborhood size (the point itself included) for a
//!   point to be "core".
//! - **Core point**: has at least MinPts neighbors within ε.
//! - **Border point**: within ε of a core point but not core itself.
//! - **Outlier**: neither core nor border.
//!
//! ## Algorithm Steps
//!
//! 1. Scan points in input order. For each unlabeled point P:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, leave P unlabeled (a later expansion may
//!      still claim it as a border point)
//!    - Else P is core: open a new cluster and expand from its neighbors
//!
//! 2. Expansion drains a FIFO work queue: each dequeued point joins the
//!    cluster unless already labeled, and contributes its own neighbors to
//!    the queue when it is core too.
//!
//! ## Complexity
//!
//! - **Time**: O(n²) with the exhaustive strategy, O(n log n) with the
//!   kd-tree.
//! - **Space**: O(n) for labels and the work queue.
//!
//! ## Determinism
//!
//! Cluster numbering is fixed by the order in which core points are first
//! discovered during the outer scan, and members keep their input order, so
//! the same input always yields the same [`Partition`].
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use super::neighbors::{Exhaustive, Indexed, NeighborQuery};
use super::partition::Partition;
use crate::error::{Error, Result};
use crate::index::{Spatial, SpatialIndex};

/// DBSCAN clustering algorithm.
#[derive(Debug, Clone)]
pub struct Dbscan {
    /// Epsilon: neighborhood radius (strict upper bound on distance).
    epsilon: f64,
    /// Minimum neighborhood size, the point itself included.
    min_points: usize,
}

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Neighborhood radius; a point at exactly `epsilon` is
    ///   not a neighbor.
    /// * `min_points` - Minimum neighborhood size for a core point. A point
    ///   is always its own neighbor, so it counts toward this threshold.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: often read off a k-distance plot (k = min_points - 1).
    /// - `min_points`: 2 × dimension is a common heuristic.
    pub fn new(epsilon: f64, min_points: usize) -> Self {
        Self { epsilon, min_points }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the minimum neighborhood size for core classification.
    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    /// Cluster `points` by evaluating `distance` against every pair.
    ///
    /// `distance` may fail; the first failure aborts the whole call and is
    /// returned unchanged, with no partial partition.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when `epsilon` is not a positive finite
    /// number, or any error produced by `distance`.
    pub fn cluster<'a, P, F>(&self, points: &'a [P], distance: F) -> Result<Partition<'a, P>>
    where
        F: Fn(&P, &P) -> Result<f64>,
    {
        self.validate()?;
        if points.is_empty() {
            return Ok(Partition::empty());
        }

        let query = Exhaustive::new(points, distance, self.epsilon);
        let (labels, n_clusters) = self.propagate(points.len(), &query)?;
        Ok(Partition::from_labels(points, &labels, n_clusters))
    }

    /// Cluster `points` using radius queries against a pre-built `index`.
    ///
    /// The index must have been built over this exact collection; there is
    /// no fallback to the exhaustive strategy.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidParameter`] when `epsilon` is not a positive finite
    /// number, or [`Error::IndexMismatch`] when the index covers a different
    /// number of points than `points`.
    pub fn cluster_indexed<'a, P, const K: usize>(
        &self,
        points: &'a [P],
        index: &SpatialIndex<K>,
    ) -> Result<Partition<'a, P>>
    where
        P: Spatial<K>,
    {
        self.validate()?;
        if index.len() != points.len() {
            return Err(Error::IndexMismatch {
                indexed: index.len(),
                points: points.len(),
            });
        }
        if points.is_empty() {
            return Ok(Partition::empty());
        }

        let query = Indexed::new(points, index, self.epsilon);
        let (labels, n_clusters) = self.propagate(points.len(), &query)?;
        Ok(Partition::from_labels(points, &labels, n_clusters))
    }

    fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be positive and finite",
            });
        }
        Ok(())
    }

    /// Label propagation over `n` points via breadth-first density expansion.
    ///
    /// Returns one label slot per point (`None` = outlier) and the number of
    /// clusters discovered. Labels are assigned once and never revoked.
    fn propagate<Q: NeighborQuery>(
        &self,
        n: usize,
        query: &Q,
    ) -> Result<(Vec<Option<usize>>, usize)> {
        let mut labels: Vec<Option<usize>> = vec![None; n];
        let mut next_label = 0_usize;

        for i in 0..n {
            if labels[i].is_some() {
                continue;
            }

            let neighbors = query.neighbors(i)?;
            if neighbors.len() < self.min_points {
                // Not core. Left unlabeled rather than marked: a later
                // expansion can still claim it as a border point.
                continue;
            }

            labels[i] = Some(next_label);

            // FIFO drain via an advancing head index. Popping the front of a
            // Vec would be quadratic on large clusters; indices may appear in
            // the queue more than once and are filtered at dequeue time.
            let mut queue = neighbors;
            let mut head = 0;
            while head < queue.len() {
                let candidate = queue[head];
                head += 1;

                if labels[candidate].is_some() {
                    continue;
                }
                // Density-reachable from this cluster's cores: joins the
                // cluster whether or not it is core itself.
                labels[candidate] = Some(next_label);

                let reachable = query.neighbors(candidate)?;
                if reachable.len() >= self.min_points {
                    queue.extend(reachable);
                }
            }

            next_label += 1;
        }

        Ok((labels, next_label))
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}
