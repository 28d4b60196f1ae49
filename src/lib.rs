//! Density-based clustering primitives.
//!
//! `denscan` is a small library implementing DBSCAN over arbitrary point
//! types, with two interchangeable neighbor-lookup strategies:
//!
//! - exhaustive pairwise evaluation of a caller-supplied distance function
//! - radius queries against a pre-built kd-tree ([`SpatialIndex`])
//!
//! The primary public API is under [`cluster`]: configure a [`Dbscan`] and
//! call [`Dbscan::cluster`] or [`Dbscan::cluster_indexed`] to obtain a
//! [`Partition`] of the input into clusters and outliers.

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod index;

pub use cluster::{Dbscan, Partition};
pub use error::{Error, Result};
pub use index::{Spatial, SpatialIndex};
