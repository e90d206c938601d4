//! Contains an online implementation of the [ProofApiClient] trait.

use crate::{EsploraError, ProofApiClient};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use spv_primitives::{
    BlockInfo, BlockInfos, MerkleProof, ParentsAndChildren, ProofInfo, TransactionInfo,
};
use tracing::{debug, trace};

/// An online implementation of the [ProofApiClient] trait over the Esplora REST API.
#[derive(Debug, Clone)]
pub struct OnlineEsploraClient {
    /// The base URL of the Esplora API, without a trailing slash.
    base: String,
    /// The inner reqwest client.
    inner: Client,
}

impl OnlineEsploraClient {
    /// Creates a new [OnlineEsploraClient] for the given base URL, e.g.
    /// `https://mempool.space/api`.
    pub fn new_http(base: impl Into<String>) -> Self {
        Self::with_client(base, Client::new())
    }

    /// Creates a new [OnlineEsploraClient] that issues requests through `inner`.
    pub fn with_client(base: impl Into<String>, inner: Client) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self { base, inner }
    }

    /// Returns the base URL.
    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    /// Issues a GET request and rejects non-success statuses.
    async fn get(
        &self,
        method: &'static str,
        path: &str,
    ) -> Result<(String, Response), EsploraError> {
        let url = self.url(path);
        trace!(target: "esplora", method, "GET {url}");

        crate::inc!(PROVIDER_CALLS, &["esplora", method]);
        crate::timer!(START, PROVIDER_RESPONSE_TIME, &["esplora", method], timer);
        let response = match self.inner.get(&url).send().await {
            Ok(response) => response,
            Err(source) => {
                crate::timer!(DISCARD, timer);
                crate::inc!(PROVIDER_ERRORS, &["esplora", method, "request"]);
                return Err(EsploraError::Request { url, source });
            }
        };

        let status = response.status();
        if !status.is_success() {
            crate::timer!(DISCARD, timer);
            crate::inc!(PROVIDER_ERRORS, &["esplora", method, "status"]);
            return Err(EsploraError::Status { url, status });
        }
        crate::timer!(STOP, timer);

        Ok((url, response))
    }

    async fn get_text(&self, method: &'static str, path: &str) -> Result<String, EsploraError> {
        let (url, response) = self.get(method, path).await?;
        match response.text().await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(source) => {
                crate::inc!(PROVIDER_ERRORS, &["esplora", method, "decode"]);
                Err(EsploraError::Request { url, source })
            }
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
    ) -> Result<T, EsploraError> {
        let (url, response) = self.get(method, path).await?;
        match response.json::<T>().await {
            Ok(value) => Ok(value),
            Err(source) => {
                crate::inc!(PROVIDER_ERRORS, &["esplora", method, "decode"]);
                Err(EsploraError::Request { url, source })
            }
        }
    }

    /// Resolves the hash of the block at `height` on the provider's best chain.
    pub async fn block_hash_at(&self, height: u64) -> Result<String, EsploraError> {
        self.get_text("block_height", &format!("block-height/{height}")).await
    }

    /// Resolves the hashes of the blocks at `heights`, one request at a time.
    async fn block_hashes(
        &self,
        heights: impl IntoIterator<Item = u64>,
    ) -> Result<Vec<String>, EsploraError> {
        let mut hashes = Vec::new();
        for height in heights {
            hashes.push(self.block_hash_at(height).await?);
        }
        Ok(hashes)
    }
}

#[async_trait]
impl ProofApiClient for OnlineEsploraClient {
    type Error = EsploraError;

    async fn fetch_transaction_info(&self, txid: &str) -> Result<TransactionInfo, Self::Error> {
        self.get_json("tx", &format!("tx/{txid}")).await
    }

    async fn fetch_transaction_hex(&self, proof_info: &ProofInfo) -> Result<String, Self::Error> {
        self.get_text("tx_hex", &format!("tx/{}/hex", proof_info.txid())).await
    }

    async fn fetch_merkle_proof(
        &self,
        proof_info: &ProofInfo,
    ) -> Result<MerkleProof, Self::Error> {
        self.get_json("merkle_proof", &format!("tx/{}/merkle-proof", proof_info.txid())).await
    }

    async fn fetch_parents_and_children_hashes(
        &self,
        proof_info: &ProofInfo,
    ) -> Result<ParentsAndChildren, Self::Error> {
        let unconfirmed = || EsploraError::Unconfirmed(proof_info.txid().to_string());
        let parent_heights = proof_info.parent_heights().ok_or_else(unconfirmed)?;
        let child_heights = proof_info.child_heights().ok_or_else(unconfirmed)?;
        debug!(
            target: "esplora",
            "Fetching parent hashes {parent_heights:?} and child hashes {child_heights:?}"
        );

        let parents = self.block_hashes(parent_heights).await?;
        let children = self.block_hashes(child_heights).await?;
        Ok(ParentsAndChildren { parents, children })
    }

    async fn fetch_proof_block_header(
        &self,
        proof_info: &ProofInfo,
    ) -> Result<String, Self::Error> {
        let hash = match proof_info.block_hash() {
            Some(hash) => hash.to_string(),
            None => {
                let height = proof_info
                    .block_height()
                    .ok_or_else(|| EsploraError::Unconfirmed(proof_info.txid().to_string()))?;
                self.block_hash_at(height).await?
            }
        };
        self.get_text("block_header", &format!("block/{hash}/header")).await
    }

    async fn fetch_block_infos(&self, start: u64, end: u64) -> Result<BlockInfos, Self::Error> {
        debug!(target: "esplora", "Fetching block infos for heights [{start}, {end})");
        let mut blocks = Vec::new();
        for height in start..end {
            let hash = self.block_hash_at(height).await?;
            let block: BlockInfo = self.get_json("block", &format!("block/{hash}")).await?;
            blocks.push(block);
        }
        Ok(blocks.into())
    }

    async fn fetch_block_headers(
        &self,
        block_infos: &BlockInfos,
    ) -> Result<Vec<String>, Self::Error> {
        let mut headers = Vec::with_capacity(block_infos.len());
        for block in block_infos {
            let path = format!("block/{}/header", block.id);
            headers.push(self.get_text("block_header", &path).await?);
        }
        Ok(headers)
    }
}
