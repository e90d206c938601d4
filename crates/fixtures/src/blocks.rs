//! Contains the [BlockInfosLoader].

use crate::{
    cache::{read_cached, write_json},
    FixtureError, FixtureResult, LoaderConfig,
};
use serde::{Deserialize, Serialize};
use spv_esplora::ProofApiClient;
use spv_primitives::BlockInfos;
use std::path::Path;
use tracing::info;

/// Block descriptors of a height range together with their headers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockData {
    /// The block descriptors, as persisted to the cache file.
    pub block_infos: BlockInfos,
    /// The hex encoded header of each block, in the same order.
    pub headers: Vec<String>,
}

/// The [BlockInfosLoader] loads the [BlockInfos] of a height range from its cache file, or
/// fetches them when the cache file is missing, and then fetches their headers.
///
/// Only the descriptors are cached. Headers are fetched again on every load.
#[derive(Debug, Clone)]
pub struct BlockInfosLoader<C> {
    /// The provider client.
    client: C,
    /// The loader configuration.
    config: LoaderConfig,
}

impl<C> BlockInfosLoader<C>
where
    C: ProofApiClient + Send + Sync,
{
    /// Creates a new [BlockInfosLoader].
    pub const fn new(client: C, config: LoaderConfig) -> Self {
        Self { client, config }
    }

    /// Returns the provider client.
    pub const fn client(&self) -> &C {
        &self.client
    }

    /// Loads the blocks at heights `[initial_height, end)` along with their headers, and writes
    /// the descriptors back to `cache_file`.
    pub async fn load(
        &self,
        cache_file: impl AsRef<Path>,
        initial_height: u64,
        end: u64,
    ) -> FixtureResult<BlockData, C::Error> {
        let cache_file = cache_file.as_ref();

        let block_infos = match read_cached::<BlockInfos>(cache_file)? {
            Some(block_infos) => block_infos,
            None => {
                info!(
                    target: "fixtures",
                    "Fetching block infos for heights [{initial_height}, {end})"
                );
                self.client
                    .fetch_block_infos(initial_height, end)
                    .await
                    .map_err(FixtureError::Provider)?
            }
        };

        let headers =
            self.client.fetch_block_headers(&block_infos).await.map_err(FixtureError::Provider)?;

        write_json(cache_file, &block_infos)?;

        Ok(BlockData { block_infos, headers })
    }

    /// Loads the configured number of blocks starting at `initial_height`.
    pub async fn load_from(
        &self,
        cache_file: impl AsRef<Path>,
        initial_height: u64,
    ) -> FixtureResult<BlockData, C::Error> {
        let end = initial_height.saturating_add(self.config.block_count);
        self.load(cache_file, initial_height, end).await
    }
}
