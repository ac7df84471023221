//! Spatial partitioning of geolocated events.
//!
//! `quakeclump` groups point records (earthquakes, but nothing here is
//! seismology-specific) into a fixed number of clusters with k-means.
//!
//! - [`store`]: ordered, id-keyed record storage
//! - [`cluster`]: seeding, assignment/update steps, and the fixed-round driver
//! - [`events`]: loading USGS-style CSV event exports
//! - [`stats`]: mean/median/variance summaries per field and per cluster
//! - [`report`]: plain-text reports used by the `eqanalysis` binary

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod events;
pub mod report;
pub mod stats;
pub mod store;

pub use cluster::{Clustering, Kmeans, KmeansFit, Partition, Seeding};
pub use error::{Error, Result};
pub use store::{Coord, PointStore, Record};
