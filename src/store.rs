//! In-memory record storage.
//!
//! A [`PointStore`] is an ordered collection of [`Record`]s keyed by identifier.
//! Iteration follows insertion order, which is also the order the assignment
//! step visits records in (and therefore decides tie-break outcomes).
//!
//! The random initializer draws identifiers from `1..=N`, so stores fed to
//! [`crate::cluster::Kmeans`] are expected to use dense ids starting at 1.
//! [`PointStore::push`] maintains that layout; [`PointStore::insert`] accepts
//! arbitrary ids and leaves it to [`PointStore::validate_layout`] (or the
//! initializer) to reject sparse layouts.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A planar coordinate pair: `[longitude, latitude]`.
pub type Coord = [f64; 2];

/// One input event.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identifier, unique within a store.
    pub id: usize,
    /// Spatial coordinates used for distance computation.
    pub coords: Coord,
    /// Auxiliary scalar fields (e.g. magnitude, depth). Never read by the metric.
    pub aux: Vec<f64>,
}

impl Record {
    /// Create a record.
    pub fn new(id: usize, coords: Coord, aux: Vec<f64>) -> Self {
        Self { id, coords, aux }
    }
}

/// Ordered mapping from record identifier to [`Record`].
#[derive(Debug, Clone, Default)]
pub struct PointStore {
    records: Vec<Record>,
    index: HashMap<usize, usize>,
}

impl PointStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from records, keeping their order.
    pub fn from_records(records: impl IntoIterator<Item = Record>) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            store.insert(record)?;
        }
        Ok(store)
    }

    /// Build a dense store (ids `1..=N`) from bare coordinates.
    pub fn from_coords(coords: impl IntoIterator<Item = Coord>) -> Self {
        let mut store = Self::new();
        for c in coords {
            store.push(c, Vec::new());
        }
        store
    }

    /// Append a record with the next dense id and return that id.
    ///
    /// The id is `len() + 1`, so a store built only through `push` is always dense.
    /// If a record with that id was already inserted by hand, the id is bumped
    /// past it.
    pub fn push(&mut self, coords: Coord, aux: Vec<f64>) -> usize {
        let mut id = self.records.len() + 1;
        while self.index.contains_key(&id) {
            id += 1;
        }
        self.index.insert(id, self.records.len());
        self.records.push(Record { id, coords, aux });
        id
    }

    /// Insert a record with an explicit id.
    pub fn insert(&mut self, record: Record) -> Result<()> {
        if self.index.contains_key(&record.id) {
            return Err(Error::DuplicateId(record.id));
        }
        self.index.insert(record.id, self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Look up a record by id.
    pub fn get(&self, id: usize) -> Option<&Record> {
        self.index.get(&id).map(|&pos| &self.records[pos])
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Record ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.records.iter().map(|r| r.id)
    }

    /// Whether the ids are exactly `1..=len()`.
    pub fn is_dense(&self) -> bool {
        self.validate_layout().is_ok()
    }

    /// Check that every id in `1..=len()` is present.
    ///
    /// Returns [`Error::InvalidStoreLayout`] naming the smallest missing id.
    pub fn validate_layout(&self) -> Result<()> {
        let n = self.len();
        match (1..=n).find(|id| !self.index.contains_key(id)) {
            Some(id) => Err(Error::InvalidStoreLayout { id, n_items: n }),
            None => Ok(()),
        }
    }
}

impl<'a> IntoIterator for &'a PointStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
