//! The bundled sample fixture.

use crate::{cache::read_json, CacheError};
use spv_primitives::ProofInfo;
use std::path::Path;

/// Path of the sample fixture bundled with this crate.
pub const TEST_DATA_SAMPLE_FILE: &str =
    concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/test-data.sample.json");

/// Default path of the generated test data, relative to the working directory.
pub const TEST_DATA_FILE: &str = "test/fixture/test-data.json";

/// Reads the bundled sample [ProofInfo].
pub fn load_sample() -> Result<ProofInfo, CacheError> {
    load_sample_from(TEST_DATA_SAMPLE_FILE)
}

/// Reads a sample [ProofInfo] from `path`.
pub fn load_sample_from(path: impl AsRef<Path>) -> Result<ProofInfo, CacheError> {
    read_json(path.as_ref())
}
