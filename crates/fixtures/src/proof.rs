//! Contains the [ProofInfoLoader], which assembles the proof artifacts of a transaction.

use crate::{
    cache::{read_cached, write_json},
    FixtureError, FixtureResult, LoaderConfig,
};
use serde::{Deserialize, Serialize};
use spv_esplora::ProofApiClient;
use spv_primitives::{MerkleProof, ProofInfo};
use std::path::Path;
use tracing::{debug, info};

/// The proof info of a transaction together with its fetched artifacts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofData {
    /// The proof info, as persisted to the cache file.
    pub proof_info: ProofInfo,
    /// The raw transaction, hex encoded.
    pub raw_tx: String,
    /// The merkle inclusion proof.
    pub merkle_proof: MerkleProof,
    /// Hashes of the blocks from the initial height up to the proof block.
    pub parents: Vec<String>,
    /// Hashes of the blocks following the proof block.
    pub children: Vec<String>,
    /// Header of the proof block, hex encoded.
    pub header: String,
}

/// The [ProofInfoLoader] loads a [ProofInfo] from its cache file, or fetches it when the cache
/// file is missing, and then fetches the artifacts that depend on it.
#[derive(Debug, Clone)]
pub struct ProofInfoLoader<C> {
    /// The provider client.
    client: C,
    /// The loader configuration.
    config: LoaderConfig,
}

impl<C> ProofInfoLoader<C>
where
    C: ProofApiClient + Send + Sync,
{
    /// Creates a new [ProofInfoLoader].
    pub const fn new(client: C, config: LoaderConfig) -> Self {
        Self { client, config }
    }

    /// Returns the provider client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Loads the proof data for `txid`.
    ///
    /// A fresh [ProofInfo] gets the configured `step` and `initial_height` assigned. A cached
    /// one is used as is. Either way the proof block must not be below `initial_height`. The
    /// raw transaction, merkle proof, parent and child hashes, and block header are then
    /// fetched in that order, and only once all of them succeeded is the proof info written
    /// back to `cache_file`.
    pub async fn load(
        &self,
        cache_file: impl AsRef<Path>,
        txid: &str,
        initial_height: u64,
    ) -> FixtureResult<ProofData, C::Error> {
        let cache_file = cache_file.as_ref();

        let proof_info = match read_cached::<ProofInfo>(cache_file)? {
            Some(proof_info) => proof_info,
            None => {
                info!(target: "fixtures", "Fetching transaction info for {txid}");
                let tx = self
                    .client
                    .fetch_transaction_info(txid)
                    .await
                    .map_err(FixtureError::Provider)?;
                ProofInfo::new(tx, self.config.step, initial_height)
            }
        };

        let block_height = proof_info
            .block_height()
            .ok_or_else(|| FixtureError::Unconfirmed(proof_info.txid().to_string()))?;
        if block_height < initial_height {
            return Err(FixtureError::InvalidHeight { block_height, initial_height });
        }

        debug!(
            target: "fixtures",
            "Fetching proof artifacts for {} at height {block_height}",
            proof_info.txid()
        );
        let raw_tx =
            self.client.fetch_transaction_hex(&proof_info).await.map_err(FixtureError::Provider)?;
        let merkle_proof =
            self.client.fetch_merkle_proof(&proof_info).await.map_err(FixtureError::Provider)?;
        let hashes = self
            .client
            .fetch_parents_and_children_hashes(&proof_info)
            .await
            .map_err(FixtureError::Provider)?;
        let header = self
            .client
            .fetch_proof_block_header(&proof_info)
            .await
            .map_err(FixtureError::Provider)?;

        write_json(cache_file, &proof_info)?;

        Ok(ProofData {
            proof_info,
            raw_tx,
            merkle_proof,
            parents: hashes.parents,
            children: hashes.children,
            header,
        })
    }
}
