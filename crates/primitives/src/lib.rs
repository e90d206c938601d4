#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod transaction;
pub use transaction::{MerkleProof, ProofInfo, TransactionInfo, TransactionStatus};

mod block;
pub use block::{BlockInfo, BlockInfos, ParentsAndChildren};

/// An open map of provider fields that are carried through without interpretation.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
