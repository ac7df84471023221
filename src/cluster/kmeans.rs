//! K-means with a fixed number of Lloyd rounds.
//!
//! A run seeds `k` centroids once, then executes exactly `iterations` rounds of
//! assignment followed by update. There is no convergence test: a partition
//! that stabilizes early is simply reproduced by the remaining rounds.
//!
//! Two policies are observable in the output and are kept exactly:
//!
//! - **Ties** go to the lowest-indexed centroid. Records are visited in store
//!   order and centroids scanned in index order; only a strictly smaller
//!   distance displaces the current best.
//! - **Empty clusters** get centroid `(0, 0)`. They are not dropped, frozen,
//!   or reseeded.

use std::collections::HashMap;

use log::{debug, info};

use super::init::{validate_k, RandomSeeding};
use super::traits::{Clustering, Seeding};
use super::util::euclidean;
use crate::error::{Error, Result};
use crate::store::{Coord, PointStore};

/// Number of clusters used by [`Kmeans::default`].
pub const DEFAULT_CLUSTERS: usize = 6;

/// Number of rounds used when none is configured.
pub const DEFAULT_ITERATIONS: i64 = 7;

/// `k` ordered sequences of record ids; index `i` is cluster `i`.
pub type Partition = Vec<Vec<usize>>;

/// K-means configuration.
#[derive(Debug, Clone)]
pub struct Kmeans {
    k: usize,
    iterations: i64,
    seed: Option<u64>,
}

impl Kmeans {
    /// Create a k-means clusterer with `k` clusters and the default round count.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
        }
    }

    /// Set the exact number of rounds to run. Negative values are rejected at fit time.
    pub fn with_iterations(mut self, iterations: i64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Seed the random initializer for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Configured round count.
    pub fn iterations(&self) -> i64 {
        self.iterations
    }

    /// Fit with random rejection-sampling seeding.
    pub fn fit(&self, store: &PointStore) -> Result<KmeansFit> {
        self.fit_with(store, &mut RandomSeeding::new(self.seed))
    }

    /// Fit with a caller-supplied seeding strategy.
    ///
    /// `k` and the round count are validated before the seeding is consulted.
    pub fn fit_with(&self, store: &PointStore, seeding: &mut dyn Seeding) -> Result<KmeansFit> {
        validate_k(self.k, store)?;
        let rounds = usize::try_from(self.iterations)
            .map_err(|_| Error::InvalidIterationCount { requested: self.iterations })?;

        let centroids = seeding.seed(self.k, store)?;
        if centroids.len() != self.k {
            return Err(Error::InvalidParameter {
                name: "seeding",
                message: "seeding must return exactly k centroids",
            });
        }

        info!(
            "k-means: {} records, k={}, {} rounds",
            store.len(),
            self.k,
            rounds
        );

        let mut state = State::new(centroids);
        for round in 0..rounds {
            state = state.step(store);
            debug!(
                "round {}: cluster sizes {:?}",
                round + 1,
                state.clusters.iter().map(Vec::len).collect::<Vec<_>>()
            );
        }

        let fit = state.finish();
        info!(
            "k-means done: {} empty clusters",
            fit.clusters.iter().filter(|c| c.is_empty()).count()
        );
        Ok(fit)
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(DEFAULT_CLUSTERS)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, store: &PointStore) -> Result<Vec<usize>> {
        validate_k(self.k, store)?;
        if self.iterations == 0 {
            return Err(Error::InvalidParameter {
                name: "iterations",
                message: "labels need at least one round",
            });
        }
        let fit = self.fit(store)?;
        Ok(fit.labels(store).into_iter().flatten().collect())
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Working state threaded through the rounds of one run.
struct State {
    centroids: Vec<Coord>,
    clusters: Partition,
    history: Vec<Vec<Coord>>,
}

impl State {
    fn new(centroids: Vec<Coord>) -> Self {
        let k = centroids.len();
        Self {
            history: vec![centroids.clone()],
            centroids,
            clusters: vec![Vec::new(); k],
        }
    }

    /// One round: assignment, then update.
    fn step(mut self, store: &PointStore) -> Self {
        self.clusters = assign(&self.centroids, store);
        self.centroids = update(&self.clusters, store);
        self.history.push(self.centroids.clone());
        self
    }

    fn finish(self) -> KmeansFit {
        KmeansFit {
            centroids: self.centroids,
            clusters: self.clusters,
            history: self.history,
        }
    }
}

/// Result of a completed k-means run.
#[derive(Debug, Clone, PartialEq)]
pub struct KmeansFit {
    /// Centroids after the last update step.
    pub centroids: Vec<Coord>,
    /// Final partition. Empty (all clusters empty) when zero rounds ran.
    pub clusters: Partition,
    /// Initial centroids followed by the centroids after each round.
    pub history: Vec<Vec<Coord>>,
}

impl KmeansFit {
    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }

    /// Cluster index for every record of `store`, in store order.
    ///
    /// `None` for records the partition does not mention, which is every record
    /// when zero rounds ran.
    pub fn labels(&self, store: &PointStore) -> Vec<Option<usize>> {
        let mut by_id: HashMap<usize, usize> = HashMap::with_capacity(store.len());
        for (cluster, members) in self.clusters.iter().enumerate() {
            for &id in members {
                by_id.insert(id, cluster);
            }
        }
        store.ids().map(|id| by_id.get(&id).copied()).collect()
    }
}

/// Assign every record to its nearest centroid.
///
/// Records are visited in store order, so each cluster lists its ids in store
/// order. Equidistant centroids resolve to the lowest index. An empty store
/// yields `centroids.len()` empty clusters.
pub fn assign(centroids: &[Coord], store: &PointStore) -> Partition {
    let mut clusters: Partition = vec![Vec::new(); centroids.len()];
    if centroids.is_empty() {
        return clusters;
    }

    for record in store {
        let mut best = 0;
        let mut best_dist = euclidean(&record.coords, &centroids[0]);
        for (idx, centroid) in centroids.iter().enumerate().skip(1) {
            let d = euclidean(&record.coords, centroid);
            if d < best_dist {
                best = idx;
                best_dist = d;
            }
        }
        clusters[best].push(record.id);
    }

    clusters
}

/// Recompute each centroid as the mean of its members' coordinates.
///
/// Empty clusters map to `(0, 0)`. Ids missing from the store are skipped.
pub fn update(clusters: &[Vec<usize>], store: &PointStore) -> Vec<Coord> {
    clusters
        .iter()
        .map(|members| {
            let mut sum = [0.0f64; 2];
            let mut count = 0usize;
            for record in members.iter().filter_map(|&id| store.get(id)) {
                sum[0] += record.coords[0];
                sum[1] += record.coords[1];
                count += 1;
            }
            if count == 0 {
                [0.0, 0.0]
            } else {
                [sum[0] / count as f64, sum[1] / count as f64]
            }
        })
        .collect()
}

/// Run k-means with random seeding and return the final partition.
pub fn run(k: usize, iterations: i64, store: &PointStore) -> Result<Partition> {
    Ok(Kmeans::new(k)
        .with_iterations(iterations)
        .fit(store)?
        .clusters)
}
