//! Error types for the Esplora client.

use reqwest::StatusCode;
use thiserror::Error;

/// An error returned by the [OnlineEsploraClient].
///
/// [OnlineEsploraClient]: crate::OnlineEsploraClient
#[derive(Error, Debug)]
pub enum EsploraError {
    /// The request could not be sent or its body could not be decoded.
    #[error("Request to {url} failed: {source}")]
    Request {
        /// The requested URL.
        url: String,
        /// The underlying transport or decode error.
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("Request to {url} returned status {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The response status.
        status: StatusCode,
    },
    /// The operation needs a confirmed transaction, but the transaction has no block height.
    #[error("Transaction {0} is not confirmed")]
    Unconfirmed(String),
}
