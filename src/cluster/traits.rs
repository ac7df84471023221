use crate::error::Result;
use crate::store::{Coord, PointStore};

/// Common interface for hard clustering algorithms (one label per record).
pub trait Clustering {
    /// Fit the model and return one cluster index per record, in store order.
    fn fit_predict(&self, store: &PointStore) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}

/// Source of initial centroids for a k-means run.
///
/// The driver calls [`Seeding::seed`] exactly once per run, after validating `k`
/// against the store. Implementations return `k` two-coordinate centroids.
pub trait Seeding {
    /// Produce `k` initial centroids for `store`.
    fn seed(&mut self, k: usize, store: &PointStore) -> Result<Vec<Coord>>;
}
