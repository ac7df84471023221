//! Fixed-round k-means over planar coordinates.
//!
//! ## The algorithm
//!
//! Assign each record to its nearest centroid, then move each centroid to the
//! mean of its records. Repeat a fixed number of times.
//!
//! ```text
//! seed ──► assign ──► update ──► assign ──► update ──► ... (exactly I rounds)
//! ```
//!
//! Distance is planar Euclidean over the first two coordinates of a record
//! (longitude, latitude). Auxiliary fields never influence the partition.
//!
//! ## Seeding
//!
//! Initial centroids come from a [`Seeding`] implementation:
//!
//! - [`RandomSeeding`]: `k` distinct records drawn uniformly by rejection
//!   sampling over ids `1..=N` (optionally from a fixed RNG seed).
//! - [`FixedCentroids`]: a pre-selected centroid list.
//! - [`DrawSequence`]: a scripted sequence of id draws run through the same
//!   rejection sampler.
//!
//! ## Usage
//!
//! ```rust
//! use quakeclump::cluster::{Clustering, FixedCentroids, Kmeans};
//! use quakeclump::PointStore;
//!
//! let store = PointStore::from_coords([
//!     [0.0, 0.0],
//!     [0.1, 0.1],
//!     [10.0, 10.0],
//!     [10.1, 10.1],
//! ]);
//!
//! // Random seeding, reproducible through the seed.
//! let labels = Kmeans::new(2).with_iterations(5).with_seed(42).fit_predict(&store).unwrap();
//! assert_eq!(labels.len(), 4);
//!
//! // Injected seeding for fully deterministic runs.
//! let fit = Kmeans::new(2)
//!     .with_iterations(3)
//!     .fit_with(&store, &mut FixedCentroids::new(vec![[0.0, 0.0], [10.0, 10.0]]))
//!     .unwrap();
//! assert_eq!(fit.clusters, vec![vec![1, 2], vec![3, 4]]);
//! ```

mod init;
mod kmeans;
mod traits;
mod util;

pub use init::{initialize, initialize_with, DrawSequence, FixedCentroids, RandomSeeding};
pub use kmeans::{
    assign, run, update, Kmeans, KmeansFit, Partition, DEFAULT_CLUSTERS, DEFAULT_ITERATIONS,
};
pub use traits::{Clustering, Seeding};
pub use util::euclidean;
