//! Test utilities for the provider interface.

use crate::ProofApiClient;
use async_trait::async_trait;
use spin::Mutex;
use spv_primitives::{
    BlockInfos, MerkleProof, ParentsAndChildren, ProofInfo, TransactionInfo,
};
use std::sync::Arc;

/// A call received by the [MockProofApiClient].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    /// `fetch_transaction_info` with the requested txid.
    TransactionInfo(String),
    /// `fetch_transaction_hex`.
    TransactionHex,
    /// `fetch_merkle_proof`.
    MerkleProof,
    /// `fetch_parents_and_children_hashes`.
    ParentsAndChildren,
    /// `fetch_proof_block_header`.
    ProofBlockHeader,
    /// `fetch_block_infos` with the requested range.
    BlockInfos(u64, u64),
    /// `fetch_block_headers` with the number of blocks passed in.
    BlockHeaders(usize),
}

/// The shared log of calls received by a [MockProofApiClient].
#[derive(Debug, Default, Clone)]
pub struct CallLog(pub Arc<Mutex<Vec<MockCall>>>);

impl CallLog {
    /// Returns a copy of the recorded calls, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        self.0.lock().clone()
    }

    /// Returns `true` if no call has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }

    fn record(&self, call: MockCall) {
        self.0.lock().push(call);
    }
}

/// A mock [ProofApiClient] for testing.
///
/// Every operation records itself in [MockProofApiClient::calls] before answering, so failed
/// calls are logged as well.
#[derive(Debug, Default, Clone)]
pub struct MockProofApiClient {
    /// The transaction record.
    pub transaction_info: Option<TransactionInfo>,
    /// The raw transaction hex.
    pub transaction_hex: Option<String>,
    /// The merkle proof.
    pub merkle_proof: Option<MerkleProof>,
    /// The parent and child block hashes.
    pub parents_and_children: Option<ParentsAndChildren>,
    /// The proof block header.
    pub proof_block_header: Option<String>,
    /// The block descriptors.
    pub block_infos: Option<BlockInfos>,
    /// The block headers.
    pub block_headers: Option<Vec<String>>,
    /// The calls received so far.
    pub calls: CallLog,
}

/// A mock provider error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockProofApiClientError {
    /// The value for the named operation is not set.
    #[error("{0} not set")]
    NotSet(&'static str),
}

#[async_trait]
impl ProofApiClient for MockProofApiClient {
    type Error = MockProofApiClientError;

    async fn fetch_transaction_info(&self, txid: &str) -> Result<TransactionInfo, Self::Error> {
        self.calls.record(MockCall::TransactionInfo(txid.to_string()));
        self.transaction_info.clone().ok_or(MockProofApiClientError::NotSet("transaction_info"))
    }

    async fn fetch_transaction_hex(&self, _: &ProofInfo) -> Result<String, Self::Error> {
        self.calls.record(MockCall::TransactionHex);
        self.transaction_hex.clone().ok_or(MockProofApiClientError::NotSet("transaction_hex"))
    }

    async fn fetch_merkle_proof(&self, _: &ProofInfo) -> Result<MerkleProof, Self::Error> {
        self.calls.record(MockCall::MerkleProof);
        self.merkle_proof.clone().ok_or(MockProofApiClientError::NotSet("merkle_proof"))
    }

    async fn fetch_parents_and_children_hashes(
        &self,
        _: &ProofInfo,
    ) -> Result<ParentsAndChildren, Self::Error> {
        self.calls.record(MockCall::ParentsAndChildren);
        self.parents_and_children
            .clone()
            .ok_or(MockProofApiClientError::NotSet("parents_and_children"))
    }

    async fn fetch_proof_block_header(&self, _: &ProofInfo) -> Result<String, Self::Error> {
        self.calls.record(MockCall::ProofBlockHeader);
        self.proof_block_header.clone().ok_or(MockProofApiClientError::NotSet("proof_block_header"))
    }

    async fn fetch_block_infos(&self, start: u64, end: u64) -> Result<BlockInfos, Self::Error> {
        self.calls.record(MockCall::BlockInfos(start, end));
        self.block_infos.clone().ok_or(MockProofApiClientError::NotSet("block_infos"))
    }

    async fn fetch_block_headers(
        &self,
        block_infos: &BlockInfos,
    ) -> Result<Vec<String>, Self::Error> {
        self.calls.record(MockCall::BlockHeaders(block_infos.len()));
        self.block_headers.clone().ok_or(MockProofApiClientError::NotSet("block_headers"))
    }
}
