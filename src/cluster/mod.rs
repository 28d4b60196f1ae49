//! Density-based clustering.
//!
//! DBSCAN groups points by neighborhood density: a point whose ε-neighborhood
//! (itself included) holds at least `min_points` members is a *core point*
//! and opens or extends a cluster; points reachable from a core point but not
//! core themselves join as *border points*; everything else is an outlier.
//!
//! Neighborhoods can be computed two ways, selected by entry point:
//!
//! - [`Dbscan::cluster`] evaluates a caller-supplied distance function
//!   against every pair of points (O(n²), any metric, fallible).
//! - [`Dbscan::cluster_indexed`] queries a pre-built Euclidean
//!   [`SpatialIndex`](crate::SpatialIndex) (O(log n) per query).
//!
//! Both produce the same partition whenever the index agrees with the
//! distance function.
//!
//! ## Usage
//!
//! ```rust
//! use denscan::{Dbscan, SpatialIndex};
//!
//! let data: Vec<[f64; 2]> = vec![
//!     [0.0, 0.0],
//!     [0.1, 0.1],
//!     [10.0, 10.0],
//!     [10.1, 10.1],
//!     [50.0, 50.0],
//! ];
//!
//! let dbscan = Dbscan::new(0.5, 2);
//!
//! // Exhaustive, with an explicit distance function.
//! let euclidean = |a: &[f64; 2], b: &[f64; 2]| {
//!     Ok(((a[0] - b[0]).powi(2) + (a[1] - b[1]).powi(2)).sqrt())
//! };
//! let partition = dbscan.cluster(&data, euclidean).unwrap();
//! assert_eq!(partition.n_clusters(), 2);
//! assert_eq!(partition.outliers(), &[&data[4]]);
//!
//! // Indexed, against a kd-tree built once over the same points.
//! let index = SpatialIndex::build(&data);
//! let indexed = dbscan.cluster_indexed(&data, &index).unwrap();
//! assert_eq!(partition, indexed);
//! ```

mod dbscan;
mod neighbors;
mod partition;

pub use dbscan::Dbscan;
pub use partition::Partition;
