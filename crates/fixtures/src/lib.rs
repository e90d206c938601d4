#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

pub mod cache;

mod errors;
pub use errors::{CacheError, FixtureError, FixtureResult};

mod constants;
pub use constants::{SharedTestFixture, DEFAULT_BLOCK_COUNT, DEFAULT_STEP, SHARED_FIXTURE};

mod config;
pub use config::LoaderConfig;

mod proof;
pub use proof::{ProofData, ProofInfoLoader};

mod blocks;
pub use blocks::{BlockData, BlockInfosLoader};

mod sample;
pub use sample::{load_sample, load_sample_from, TEST_DATA_FILE, TEST_DATA_SAMPLE_FILE};

mod test_data;
pub use test_data::TestData;

#[cfg(test)]
mod test_utils;
