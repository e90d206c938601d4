//! Transaction records and the [ProofInfo] built on top of them.

use crate::ExtraFields;
use serde::{Deserialize, Serialize};
use std::ops::{Range, RangeInclusive};

/// The confirmation status of a transaction, as reported by the provider.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionStatus {
    /// Whether the transaction has been included in a block.
    pub confirmed: bool,
    /// Height of the containing block. [None] while unconfirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<u64>,
    /// Hash of the containing block. [None] while unconfirmed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    /// Timestamp of the containing block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_time: Option<u64>,
    /// Provider fields not interpreted here.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl TransactionStatus {
    /// Creates a confirmed status at the given height and block hash.
    pub fn confirmed(block_height: u64, block_hash: impl Into<String>) -> Self {
        Self {
            confirmed: true,
            block_height: Some(block_height),
            block_hash: Some(block_hash.into()),
            ..Default::default()
        }
    }
}

/// A transaction record as returned by the provider.
///
/// Only `txid` and `status` are typed. Everything else (`vin`, `vout`, `fee`, ...) lives in
/// [TransactionInfo::extra].
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInfo {
    /// The transaction id, hex encoded.
    pub txid: String,
    /// The confirmation status.
    pub status: TransactionStatus,
    /// Provider fields not interpreted here.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// Metadata describing a transaction's inclusion proof.
///
/// On disk this is the provider's transaction record with `step` and `initial_height` merged in
/// at the top level.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofInfo {
    /// The provider's transaction record.
    #[serde(flatten)]
    pub tx: TransactionInfo,
    /// Number of blocks following the proof block that are included in the proof.
    pub step: u64,
    /// The lowest block height the proof starts from.
    pub initial_height: u64,
}

impl ProofInfo {
    /// Creates a new [ProofInfo] from a freshly fetched transaction record.
    pub const fn new(tx: TransactionInfo, step: u64, initial_height: u64) -> Self {
        Self { tx, step, initial_height }
    }

    /// Returns the transaction id.
    pub fn txid(&self) -> &str {
        &self.tx.txid
    }

    /// Returns the height of the block containing the transaction, if confirmed.
    pub const fn block_height(&self) -> Option<u64> {
        self.tx.status.block_height
    }

    /// Returns the hash of the block containing the transaction, if known.
    pub fn block_hash(&self) -> Option<&str> {
        self.tx.status.block_hash.as_deref()
    }

    /// Heights of the blocks preceding the proof block, starting at `initial_height`.
    ///
    /// Empty when the proof block is the initial block. [None] while unconfirmed.
    pub fn parent_heights(&self) -> Option<Range<u64>> {
        self.block_height().map(|height| self.initial_height.min(height)..height)
    }

    /// Heights of the `step` blocks following the proof block. [None] while unconfirmed.
    pub fn child_heights(&self) -> Option<RangeInclusive<u64>> {
        self.block_height()
            .map(|height| height.saturating_add(1)..=height.saturating_add(self.step))
    }
}

/// A merkle inclusion proof for a transaction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerkleProof {
    /// Height of the block the proof commits to.
    pub block_height: u64,
    /// Sibling hashes from the leaf up to the merkle root.
    pub merkle: Vec<String>,
    /// Position of the transaction in the block.
    pub pos: u64,
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn esplora_tx() -> serde_json::Value {
        json!({
            "txid": "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b",
            "version": 2,
            "locktime": 0,
            "vin": [],
            "vout": [{ "value": 131072, "scriptpubkey_type": "v1_p2tr" }],
            "fee": 154,
            "status": {
                "confirmed": true,
                "block_height": 100,
                "block_hash": "00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054",
                "block_time": 1722328130
            }
        })
    }

    #[test]
    fn test_proof_info_keeps_provider_fields() {
        let tx: TransactionInfo = serde_json::from_value(esplora_tx()).unwrap();
        let proof_info = ProofInfo::new(tx, 10, 90);

        let value = serde_json::to_value(&proof_info).unwrap();
        assert_eq!(value["step"], 10);
        assert_eq!(value["initial_height"], 90);
        assert_eq!(value["fee"], 154);
        assert_eq!(value["vout"][0]["value"], 131072);
        assert_eq!(value["status"]["block_height"], 100);

        let parsed: ProofInfo = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, proof_info);
        assert!(!parsed.tx.extra.contains_key("step"));
    }

    #[test]
    fn test_proof_info_requires_step() {
        let result = serde_json::from_value::<ProofInfo>(esplora_tx());
        assert!(result.is_err());
    }

    #[test]
    fn test_unconfirmed_status() {
        let status: TransactionStatus =
            serde_json::from_value(json!({ "confirmed": false })).unwrap();
        assert_eq!(status.block_height, None);

        let proof_info = ProofInfo::new(TransactionInfo { status, ..Default::default() }, 10, 0);
        assert_eq!(proof_info.parent_heights(), None);
        assert_eq!(proof_info.child_heights(), None);
        let status = serde_json::to_value(&proof_info.tx.status).unwrap();
        assert_eq!(status, json!({ "confirmed": false }));
    }

    #[test]
    fn test_proof_block_at_initial_height() {
        let tx = TransactionInfo {
            status: TransactionStatus::confirmed(100, "00"),
            ..Default::default()
        };
        let proof_info = ProofInfo::new(tx, 10, 100);
        assert!(proof_info.parent_heights().unwrap().is_empty());
        assert_eq!(proof_info.child_heights(), Some(101..=110));
    }

    proptest! {
        #[test]
        fn test_height_ranges(initial in 0u64..1_000_000, offset in 0u64..1_000, step in 0u64..64) {
            let tx = TransactionInfo {
                status: TransactionStatus::confirmed(initial + offset, "00"),
                ..Default::default()
            };
            let proof_info = ProofInfo::new(tx, step, initial);

            let parents = proof_info.parent_heights().unwrap();
            prop_assert_eq!(parents.start, initial);
            prop_assert_eq!(parents.count() as u64, offset);
            prop_assert_eq!(proof_info.child_heights().unwrap().count() as u64, step);
        }
    }
}
