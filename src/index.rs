//! Spatial index support for the indexed neighbor-lookup strategy.
//!
//! The clustering engine never talks to the kd-tree directly; it consumes a
//! [`SpatialIndex`] through `build` and `query` only. Any point type that can
//! expose a fixed number of real-valued coordinates can be indexed by
//! implementing [`Spatial`].

use kiddo::{ImmutableKdTree, SquaredEuclidean};

/// Capability for point types with `K` real-valued coordinates.
///
/// Implementors must return a finite value for every axis in `0..K`.
pub trait Spatial<const K: usize> {
    /// The coordinate of this point along `axis`.
    fn coordinate(&self, axis: usize) -> f64;

    /// All `K` coordinates as an array, in axis order.
    fn position(&self) -> [f64; K] {
        std::array::from_fn(|axis| self.coordinate(axis))
    }
}

impl<const K: usize> Spatial<K> for [f64; K] {
    fn coordinate(&self, axis: usize) -> f64 {
        self[axis]
    }

    fn position(&self) -> [f64; K] {
        *self
    }
}

/// A Euclidean radius-query index over a fixed collection of points.
///
/// Built once over the full collection; queries return indices into the
/// collection the index was built from, so duplicate points are tracked by
/// position rather than by value.
pub struct SpatialIndex<const K: usize> {
    // kiddo's immutable tree cannot be built over zero entries, so the empty
    // collection is represented by `None` and queried as empty.
    tree: Option<ImmutableKdTree<f64, K>>,
    len: usize,
}

impl<const K: usize> std::fmt::Debug for SpatialIndex<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("dimensions", &K)
            .field("len", &self.len)
            .finish()
    }
}

impl<const K: usize> SpatialIndex<K> {
    /// Build an index over `points`.
    ///
    /// Positions are materialised once here; queries never call back into
    /// [`Spatial::coordinate`].
    pub fn build<P: Spatial<K>>(points: &[P]) -> Self {
        let rows: Vec<[f64; K]> = points.iter().map(Spatial::position).collect();
        let tree = if rows.is_empty() {
            None
        } else {
            Some(ImmutableKdTree::new_from_slice(&rows))
        };
        Self {
            tree,
            len: rows.len(),
        }
    }

    /// Number of points the index was built over.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the index was built over zero points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of all points strictly closer than `radius` to `center`.
    ///
    /// The query point itself is included when it belongs to the indexed
    /// collection (distance zero).
    pub fn query(&self, center: &[f64; K], radius: f64) -> Vec<usize> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        let radius_sq = radius * radius;
        tree.within_unsorted::<SquaredEuclidean>(center, radius_sq)
            .into_iter()
            // kiddo's radius bound is inclusive; the neighborhood here is
            // strict, so a point at exactly `radius` is not a neighbor.
            .filter(|nn| nn.distance < radius_sq)
            .map(|nn| nn.item as usize)
            .collect()
    }
}
