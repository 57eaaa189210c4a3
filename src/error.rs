use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the catalog core. Command-level code wraps these
/// in `anyhow` and lets `main` print the chain.
#[derive(Debug, Error)]
pub enum Error {
    /// The catalog file or its parent directory could not be created.
    #[error("could not create catalog directory {path}")]
    StorageInit {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Selection was attempted against a catalog with zero images.
    #[error("catalog is empty, scan an image directory first")]
    EmptyCatalog,

    /// A wallpaper or color backend name outside the supported set.
    #[error("unsupported backend: {0}")]
    UnknownBackend(String),

    /// A vote targeted a path that was never catalogued.
    #[error("no catalog entry for {0}")]
    ImageNotFound(String),

    /// A vote value outside the five-member set.
    #[error("unknown vote value: {0}")]
    UnknownVote(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
