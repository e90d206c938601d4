//! Error types for the fixture loaders.

use std::path::PathBuf;
use thiserror::Error;

/// A [Result] type for the [FixtureError].
pub type FixtureResult<T, E> = Result<T, FixtureError<E>>;

/// An error reading or writing a JSON fixture or cache file.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The file could not be read or written.
    #[error("Filesystem error at {}: {source}", .path.display())]
    Io {
        /// The file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON or lacks a required field.
    #[error("Malformed cache file {}: {source}", .path.display())]
    Malformed {
        /// The file path.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
    /// The record could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(serde_json::Error),
}

/// A fixture loader error, generic over the provider's error type.
#[derive(Error, Debug)]
pub enum FixtureError<E>
where
    E: core::error::Error,
{
    /// The proof transaction is in a block below the requested initial height.
    #[error("block height lower than initialHeight: {block_height} < {initial_height}")]
    InvalidHeight {
        /// Height of the block containing the proof transaction.
        block_height: u64,
        /// The requested initial height.
        initial_height: u64,
    },
    /// The proof transaction is not confirmed, so it has no block height.
    #[error("Transaction {0} is not confirmed")]
    Unconfirmed(String),
    /// A provider fetch failed.
    #[error("Provider error: {0}")]
    Provider(E),
    /// Reading or writing a cache file failed.
    #[error(transparent)]
    Cache(#[from] CacheError),
}
