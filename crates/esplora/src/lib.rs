#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod macros;

#[cfg(feature = "metrics")]
pub mod metrics;

mod traits;
pub use traits::ProofApiClient;

mod client;
pub use client::OnlineEsploraClient;

mod errors;
pub use errors::EsploraError;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
