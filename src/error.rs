use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can be encountered while building the catalog at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Cannot read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Catalog file is not a list of game entries
    #[error("Malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),
    /// Entry without an id
    #[error("Game entry at position {0} has an empty id")]
    EmptyId(usize),
    /// Two entries share the same id
    #[error("Duplicate game id: {0}")]
    DuplicateId(String),
}
