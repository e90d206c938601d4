//! The provider interface consumed by the fixture loaders.

use async_trait::async_trait;
use spv_primitives::{
    BlockInfos, MerkleProof, ParentsAndChildren, ProofInfo, TransactionInfo,
};

/// The [ProofApiClient] is the set of remote fetches needed to build proof fixtures.
///
/// Every operation returns the provider's value unmodified or fails with [Self::Error].
/// Implementations must not retry.
#[async_trait]
pub trait ProofApiClient {
    /// The error type for [ProofApiClient] implementations.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Fetches the transaction record for `txid`.
    async fn fetch_transaction_info(&self, txid: &str) -> Result<TransactionInfo, Self::Error>;

    /// Fetches the raw transaction of the proof, hex encoded.
    async fn fetch_transaction_hex(&self, proof_info: &ProofInfo) -> Result<String, Self::Error>;

    /// Fetches the merkle inclusion proof of the proof transaction.
    async fn fetch_merkle_proof(&self, proof_info: &ProofInfo)
        -> Result<MerkleProof, Self::Error>;

    /// Fetches the hashes of the blocks before and after the proof block.
    ///
    /// See [ProofInfo::parent_heights] and [ProofInfo::child_heights] for the covered ranges.
    async fn fetch_parents_and_children_hashes(
        &self,
        proof_info: &ProofInfo,
    ) -> Result<ParentsAndChildren, Self::Error>;

    /// Fetches the header of the block containing the proof transaction, hex encoded.
    async fn fetch_proof_block_header(&self, proof_info: &ProofInfo)
        -> Result<String, Self::Error>;

    /// Fetches the block descriptors for the heights in `[start, end)`.
    async fn fetch_block_infos(&self, start: u64, end: u64) -> Result<BlockInfos, Self::Error>;

    /// Fetches the hex encoded header of every block in `block_infos`, in the same order.
    async fn fetch_block_headers(
        &self,
        block_infos: &BlockInfos,
    ) -> Result<Vec<String>, Self::Error>;
}
