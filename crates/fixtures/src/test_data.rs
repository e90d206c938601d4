//! The generated test-data file.

use crate::{cache::write_json, BlockData, CacheError, ProofData, SharedTestFixture};
use serde::Serialize;
use std::path::Path;

/// Everything a verification test needs: the shared identities, one proof, and the block range
/// it is checked against.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    /// The shared test identities.
    pub shared: SharedTestFixture,
    /// The proof artifacts.
    pub proof: ProofData,
    /// The block descriptors and headers.
    pub blocks: BlockData,
}

impl TestData {
    /// Creates a new [TestData].
    pub const fn new(shared: SharedTestFixture, proof: ProofData, blocks: BlockData) -> Self {
        Self { shared, proof, blocks }
    }

    /// Writes the test data to `path` in the cache file format, creating missing parent
    /// directories.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), CacheError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| CacheError::Io { path: parent.to_path_buf(), source })?;
        }
        write_json(path, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{test_utils::block_infos, SHARED_FIXTURE};
    use spv_primitives::{MerkleProof, ProofInfo};
    use tempfile::tempdir;

    #[test]
    fn test_write_nested_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test").join("fixture").join("test-data.json");
        let proof = ProofData {
            proof_info: ProofInfo::default(),
            raw_tx: "02".to_string(),
            merkle_proof: MerkleProof::default(),
            parents: vec![],
            children: vec![],
            header: "00".to_string(),
        };
        let blocks =
            BlockData { block_infos: block_infos(0, 2), headers: vec!["h0".into(), "h1".into()] };

        TestData::new(SHARED_FIXTURE, proof, blocks).write(&path).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["shared"]["pegInTimelock"], 1);
        assert_eq!(value["proof"]["rawTx"], "02");
        assert_eq!(value["proof"]["merkleProof"]["pos"], 0);
        assert_eq!(value["blocks"]["blockInfos"][1]["height"], 1);
        assert_eq!(value["blocks"]["headers"][1], "h1");
    }
}
