use thiserror::Error;

/// Errors returned by the clustering engine and its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// Event input contained no event lines.
    #[error("empty input")]
    EmptyInput,

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// Requested cluster count is zero or larger than the store.
    #[error("invalid cluster count: requested {requested}, but store has {n_items} records")]
    InvalidClusterCount {
        /// Requested number of clusters.
        requested: usize,
        /// Number of records in the store.
        n_items: usize,
    },

    /// Requested iteration count is negative.
    #[error("invalid iteration count: {requested}")]
    InvalidIterationCount {
        /// Requested number of rounds.
        requested: i64,
    },

    /// The store's identifiers are not exactly `1..=n_items`.
    #[error("invalid store layout: no record with id {id} in a store of {n_items} records")]
    InvalidStoreLayout {
        /// Identifier that was expected but missing.
        id: usize,
        /// Number of records in the store.
        n_items: usize,
    },

    /// A record with this identifier is already in the store.
    #[error("duplicate record id {0}")]
    DuplicateId(usize),

    /// Malformed event line.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the input.
        line: usize,
        /// What went wrong.
        message: String,
    },

    /// Underlying I/O failure while reading events.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
