//! Fixed values for deterministic test construction.

use serde::Serialize;

/// The default number of blocks following the proof block that are included in a proof.
pub const DEFAULT_STEP: u64 = 10;

/// The default number of blocks fetched by the block infos loader.
pub const DEFAULT_BLOCK_COUNT: u64 = 10;

/// Named test identities shared by every generated fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedTestFixture {
    /// EVM address of the peg-in depositor.
    pub depositor_evm_address: &'static str,
    /// Relative timelock of the peg-in output, in blocks.
    pub peg_in_timelock: u64,
    /// Peg-in amount, in satoshis.
    pub peg_in_value: u64,
    /// X-only public key of the depositor.
    pub depositor_pub_key: &'static str,
    /// EVM address of the peg-out withdrawer.
    pub withdrawer_evm_address: &'static str,
    /// Peg-out amount, in satoshis.
    pub peg_out_value: u64,
    /// Unix timestamp of the peg-out request.
    pub peg_out_timestamp: u64,
    /// Compressed public key of the withdrawer.
    pub withdrawer_pub_key: &'static str,
    /// Compressed public key of the operator.
    pub operator_pub_key: &'static str,
    /// X-only aggregate public key of the n-of-n signer set.
    pub n_of_n_pub_key: &'static str,
}

/// The identities used by every fixture.
pub const SHARED_FIXTURE: SharedTestFixture = SharedTestFixture {
    depositor_evm_address: "0xDDdDddDdDdddDDddDDddDDDDdDdDDdDDdDDDDDDd",
    peg_in_timelock: 1,
    peg_in_value: 131072,
    depositor_pub_key: "0xedf074e2780407ed6ff9e291b8617ee4b4b8d7623e85b58318666f33a422301b",
    withdrawer_evm_address: "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
    peg_out_value: 131072,
    peg_out_timestamp: 1722328130,
    withdrawer_pub_key: "0x02f80c9d1ef9ff640df2058c431c282299f48424480d34f1bade2274746fb4df8b",
    operator_pub_key: "0x03484db4a2950d63da8455a1b705b39715e4075dd33511d0c7e3ce308c93449deb",
    n_of_n_pub_key: "0x8b839569cde368894237913fe4fbd25d75eaf1ed019a39d479e693dac35be19e",
};
