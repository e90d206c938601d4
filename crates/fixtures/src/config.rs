//! Loader configuration.

use crate::{DEFAULT_BLOCK_COUNT, DEFAULT_STEP};

/// Parameters injected into the loaders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// The `step` assigned to freshly fetched proof infos.
    pub step: u64,
    /// The number of blocks covered by [BlockInfosLoader::load_from].
    ///
    /// [BlockInfosLoader::load_from]: crate::BlockInfosLoader::load_from
    pub block_count: u64,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self { step: DEFAULT_STEP, block_count: DEFAULT_BLOCK_COUNT }
    }
}
