//! Test helpers shared by the loader tests.

use spin::Mutex;
use spv_esplora::test_utils::MockProofApiClient;
use spv_primitives::{
    BlockInfo, BlockInfos, MerkleProof, ParentsAndChildren, TransactionInfo, TransactionStatus,
};
use std::sync::Arc;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{layer::Context, Layer};

pub(crate) const TXID: &str = "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b";
pub(crate) const BLOCK_HASH: &str =
    "00000000000000000002a7c4c1e48d76c5a37902165a270156b7a8d72728a054";

/// A confirmed transaction record at `block_height` with a few provider-only fields.
pub(crate) fn transaction_at(block_height: u64) -> TransactionInfo {
    let extra = serde_json::json!({ "version": 2, "locktime": 0, "fee": 154 });
    TransactionInfo {
        txid: TXID.to_string(),
        status: TransactionStatus::confirmed(block_height, BLOCK_HASH),
        extra: extra.as_object().cloned().unwrap_or_default(),
    }
}

/// A mock client that answers every proof fetch for a transaction at `block_height`.
pub(crate) fn proof_client(block_height: u64) -> MockProofApiClient {
    MockProofApiClient {
        transaction_info: Some(transaction_at(block_height)),
        transaction_hex: Some("0200000001".to_string()),
        merkle_proof: Some(MerkleProof {
            block_height,
            merkle: vec!["aa".repeat(32), "bb".repeat(32)],
            pos: 3,
        }),
        parents_and_children: Some(ParentsAndChildren {
            parents: vec!["01".repeat(32)],
            children: vec!["02".repeat(32), "03".repeat(32)],
        }),
        proof_block_header: Some("00".repeat(80)),
        ..Default::default()
    }
}

/// Block descriptors for the heights in `[start, end)`.
pub(crate) fn block_infos(start: u64, end: u64) -> BlockInfos {
    (start..end)
        .map(|height| BlockInfo {
            id: format!("{height:064x}"),
            height,
            previousblockhash: height.checked_sub(1).map(|parent| format!("{parent:064x}")),
            ..Default::default()
        })
        .collect::<Vec<_>>()
        .into()
}

/// The storage for the collected traces.
#[derive(Debug, Default, Clone)]
pub(crate) struct TraceStorage(pub(crate) Arc<Mutex<Vec<(Level, String)>>>);

impl TraceStorage {
    /// Returns the items in the storage that match the specified level.
    pub(crate) fn get_by_level(&self, level: Level) -> Vec<String> {
        self.0
            .lock()
            .iter()
            .filter_map(|(l, message)| if *l == level { Some(message.clone()) } else { None })
            .collect()
    }
}

/// A subscriber layer that collects traces and their log levels.
#[derive(Debug, Default)]
pub(crate) struct CollectingLayer {
    pub(crate) storage: TraceStorage,
}

impl CollectingLayer {
    pub(crate) const fn new(storage: TraceStorage) -> Self {
        Self { storage }
    }
}

impl<S: Subscriber> Layer<S> for CollectingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        let message = format!("{:?}", event);
        self.storage.0.lock().push((level, message));
    }
}
