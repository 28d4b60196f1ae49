//! Neighbor-lookup strategies behind the propagation engine.
//!
//! The engine only ever asks "which indices lie strictly within ε of point
//! i?". Everything that differs between the exhaustive and the indexed
//! variant lives behind [`NeighborQuery`], so clustering semantics cannot
//! drift between the two.

use crate::error::Result;
use crate::index::{Spatial, SpatialIndex};

/// Radius query over the input collection, by index.
///
/// Results include the query point itself (distance zero) and use the strict
/// bound `distance < ε`.
pub(crate) trait NeighborQuery {
    fn neighbors(&self, of: usize) -> Result<Vec<usize>>;
}

/// Scans every point with a caller-supplied distance function.
pub(crate) struct Exhaustive<'a, P, F> {
    points: &'a [P],
    distance: F,
    epsilon: f64,
}

impl<'a, P, F> Exhaustive<'a, P, F>
where
    F: Fn(&P, &P) -> Result<f64>,
{
    pub(crate) fn new(points: &'a [P], distance: F, epsilon: f64) -> Self {
        Self {
            points,
            distance,
            epsilon,
        }
    }
}

impl<P, F> NeighborQuery for Exhaustive<'_, P, F>
where
    F: Fn(&P, &P) -> Result<f64>,
{
    fn neighbors(&self, of: usize) -> Result<Vec<usize>> {
        let origin = &self.points[of];
        let mut hits = Vec::new();
        for (j, other) in self.points.iter().enumerate() {
            // A distance error aborts the whole clustering call; no partial
            // result is produced.
            if (self.distance)(origin, other)? < self.epsilon {
                hits.push(j);
            }
        }
        Ok(hits)
    }
}

/// Queries a pre-built kd-tree.
///
/// Query centers are materialised once at construction so repeated queries
/// never call back into [`Spatial::coordinate`].
pub(crate) struct Indexed<'a, const K: usize> {
    index: &'a SpatialIndex<K>,
    centers: Vec<[f64; K]>,
    epsilon: f64,
}

impl<'a, const K: usize> Indexed<'a, K> {
    pub(crate) fn new<P: Spatial<K>>(
        points: &[P],
        index: &'a SpatialIndex<K>,
        epsilon: f64,
    ) -> Self {
        Self {
            index,
            centers: points.iter().map(Spatial::position).collect(),
            epsilon,
        }
    }
}

impl<const K: usize> NeighborQuery for Indexed<'_, K> {
    fn neighbors(&self, of: usize) -> Result<Vec<usize>> {
        Ok(self.index.query(&self.centers[of], self.epsilon))
    }
}
