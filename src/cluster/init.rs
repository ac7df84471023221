//! Centroid seeding.
//!
//! The default seeding picks `k` distinct records uniformly at random by
//! rejection sampling: draw an id from `1..=N`, retry on duplicates, stop once
//! `k` distinct ids are in hand. Each size-`k` subset is equally likely. The
//! sampler never scans the store for valid ids; it trusts the dense `1..=N`
//! layout and fails with [`Error::InvalidStoreLayout`] the first time a draw
//! names a missing record.
//!
//! Only the two spatial coordinates of a seed record are kept; auxiliary
//! fields are dropped here rather than carried into the first round.

use std::collections::HashSet;

use log::trace;
use rand::prelude::*;

use super::traits::Seeding;
use crate::error::{Error, Result};
use crate::store::{Coord, PointStore};

/// Check `k` against the store size.
pub(crate) fn validate_k(k: usize, store: &PointStore) -> Result<()> {
    if k == 0 || k > store.len() {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: store.len(),
        });
    }
    Ok(())
}

/// Pick `k` random distinct records as initial centroids, using the thread RNG.
pub fn initialize(k: usize, store: &PointStore) -> Result<Vec<Coord>> {
    let mut rng = rand::rng();
    initialize_with(k, store, |n| Ok(rng.random_range(1..=n)))
}

/// Rejection-sample `k` distinct records using an injected draw function.
///
/// `draw(n)` must return an id in `1..=n`. Duplicate draws are discarded and
/// retried. Centroids are returned in the order their ids were first drawn.
pub fn initialize_with<F>(k: usize, store: &PointStore, mut draw: F) -> Result<Vec<Coord>>
where
    F: FnMut(usize) -> Result<usize>,
{
    validate_k(k, store)?;
    let n = store.len();

    let mut chosen: HashSet<usize> = HashSet::with_capacity(k);
    let mut centroids: Vec<Coord> = Vec::with_capacity(k);

    while centroids.len() < k {
        let id = draw(n)?;
        if !(1..=n).contains(&id) {
            return Err(Error::InvalidParameter {
                name: "draw",
                message: "drawn id must lie in 1..=N",
            });
        }
        if !chosen.insert(id) {
            trace!("rejected duplicate draw {id}");
            continue;
        }
        let record = store
            .get(id)
            .ok_or(Error::InvalidStoreLayout { id, n_items: n })?;
        centroids.push(record.coords);
    }

    Ok(centroids)
}

/// Random rejection-sampling seeding.
pub struct RandomSeeding {
    rng: Box<dyn RngCore>,
}

impl RandomSeeding {
    /// Seeded (reproducible) when `seed` is `Some`, otherwise backed by the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let rng: Box<dyn RngCore> = match seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        Self { rng }
    }

    /// Use a caller-supplied generator.
    pub fn from_rng(rng: impl RngCore + 'static) -> Self {
        Self { rng: Box::new(rng) }
    }
}

impl Seeding for RandomSeeding {
    fn seed(&mut self, k: usize, store: &PointStore) -> Result<Vec<Coord>> {
        let rng = &mut self.rng;
        initialize_with(k, store, |n| Ok(rng.random_range(1..=n)))
    }
}

/// Pre-selected centroids, used as-is.
#[derive(Debug, Clone)]
pub struct FixedCentroids {
    centroids: Vec<Coord>,
}

impl FixedCentroids {
    /// Use `centroids` as the initial centroids; their count must equal `k`.
    pub fn new(centroids: Vec<Coord>) -> Self {
        Self { centroids }
    }
}

impl Seeding for FixedCentroids {
    fn seed(&mut self, k: usize, store: &PointStore) -> Result<Vec<Coord>> {
        validate_k(k, store)?;
        if self.centroids.len() != k {
            return Err(Error::InvalidParameter {
                name: "centroids",
                message: "fixed centroid count must equal k",
            });
        }
        Ok(self.centroids.clone())
    }
}

/// Scripted id draws fed through the rejection sampler.
///
/// Lets tests pin down exactly which records seed a run, including duplicate
/// and out-of-layout draws.
#[derive(Debug, Clone)]
pub struct DrawSequence {
    draws: std::vec::IntoIter<usize>,
}

impl DrawSequence {
    /// Draw ids from `draws` in order.
    pub fn new(draws: Vec<usize>) -> Self {
        Self {
            draws: draws.into_iter(),
        }
    }
}

impl Seeding for DrawSequence {
    fn seed(&mut self, k: usize, store: &PointStore) -> Result<Vec<Coord>> {
        let draws = &mut self.draws;
        initialize_with(k, store, |_| {
            draws.next().ok_or(Error::InvalidParameter {
                name: "draws",
                message: "sequence exhausted before k distinct ids were drawn",
            })
        })
    }
}
