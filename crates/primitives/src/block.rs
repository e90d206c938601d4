//! Block descriptors.

use crate::ExtraFields;
use serde::{Deserialize, Serialize};

/// A block descriptor as returned by the provider.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInfo {
    /// The block hash, hex encoded.
    pub id: String,
    /// The block height.
    pub height: u64,
    /// Hash of the parent block. Absent for the genesis block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previousblockhash: Option<String>,
    /// Provider fields not interpreted here.
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The block descriptors of a contiguous height range, in ascending height order.
///
/// Serialized as a bare JSON array.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockInfos(pub Vec<BlockInfo>);

impl BlockInfos {
    /// Returns the number of blocks.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no blocks.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, BlockInfo> {
        self.0.iter()
    }
}

impl From<Vec<BlockInfo>> for BlockInfos {
    fn from(blocks: Vec<BlockInfo>) -> Self {
        Self(blocks)
    }
}

impl<'a> IntoIterator for &'a BlockInfos {
    type Item = &'a BlockInfo;
    type IntoIter = std::slice::Iter<'a, BlockInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Block hashes surrounding the block that contains a proof transaction.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentsAndChildren {
    /// Hashes of the blocks from `initial_height` up to, but excluding, the proof block.
    pub parents: Vec<String>,
    /// Hashes of the `step` blocks after the proof block.
    pub children: Vec<String>,
}
