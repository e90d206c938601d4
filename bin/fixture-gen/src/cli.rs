//! This module contains all CLI-specific code for the fixture generator.

use anyhow::{anyhow, Result};
use clap::{
    builder::styling::{AnsiColor, Color, Style},
    ArgAction, Parser,
};
use spv_esplora::OnlineEsploraClient;
use spv_fixtures::{
    BlockInfosLoader, LoaderConfig, ProofInfoLoader, TestData, DEFAULT_BLOCK_COUNT, DEFAULT_STEP,
    SHARED_FIXTURE, TEST_DATA_FILE,
};
use std::path::PathBuf;
use tracing::{info, Level};

const ABOUT: &str = "
fixture-gen fetches a transaction's inclusion proof and a range of block headers from an Esplora
endpoint and writes them as test data for the SPV verification suite. Every fetched record is
cached under the data directory and reused on later runs.
";

/// The fixture generator CLI arguments.
#[derive(Parser, Clone, Debug)]
#[command(about = ABOUT, version, styles = cli_styles())]
pub(crate) struct FixtureGenCli {
    /// Verbosity level (0-4)
    #[arg(long, short, action = ArgAction::Count)]
    pub(crate) v: u8,
    /// Base URL of the Esplora API, e.g. `https://mempool.space/testnet/api`.
    #[clap(long, visible_alias = "esplora", env)]
    pub(crate) esplora_url: String,
    /// Id of the transaction to build the proof for.
    #[clap(long)]
    pub(crate) txid: String,
    /// Lowest block height of the proof. Also the first block of the fetched range.
    #[clap(long)]
    pub(crate) initial_height: u64,
    /// Number of blocks fetched starting at `--initial-height`.
    #[clap(long, default_value_t = DEFAULT_BLOCK_COUNT)]
    pub(crate) block_count: u64,
    /// Number of blocks after the proof block included in a freshly fetched proof.
    #[clap(long, default_value_t = DEFAULT_STEP)]
    pub(crate) step: u64,
    /// Directory holding the cache files.
    #[clap(long, visible_alias = "db", default_value = ".", env)]
    pub(crate) data_dir: PathBuf,
    /// Path of the generated test data.
    #[clap(long, short, default_value = TEST_DATA_FILE)]
    pub(crate) output: PathBuf,
}

impl FixtureGenCli {
    /// Returns the [LoaderConfig] described by the arguments.
    pub(crate) const fn loader_config(&self) -> LoaderConfig {
        LoaderConfig { step: self.step, block_count: self.block_count }
    }

    /// Returns the exclusive end of the fetched block range.
    pub(crate) const fn end_height(&self) -> u64 {
        self.initial_height.saturating_add(self.block_count)
    }

    /// Returns the cache file of the proof info.
    pub(crate) fn proof_cache_file(&self) -> PathBuf {
        self.data_dir.join(format!("proof-info-{}.json", self.txid))
    }

    /// Returns the cache file of the block infos.
    pub(crate) fn blocks_cache_file(&self) -> PathBuf {
        self.data_dir.join(format!("blocks-{}-{}.json", self.initial_height, self.end_height()))
    }

    /// Loads the proof and block fixtures and writes the test data.
    pub(crate) async fn run(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir).map_err(|e| {
            anyhow!("Failed to create data directory {}: {e}", self.data_dir.display())
        })?;

        let client = OnlineEsploraClient::new_http(self.esplora_url.as_str());
        let config = self.loader_config();

        info!(target: "fixture_gen", "Loading proof for {}", self.txid);
        let proof = ProofInfoLoader::new(client.clone(), config)
            .load(self.proof_cache_file(), &self.txid, self.initial_height)
            .await?;

        info!(
            target: "fixture_gen",
            "Loading blocks [{}, {})",
            self.initial_height,
            self.end_height()
        );
        let blocks = BlockInfosLoader::new(client, config)
            .load_from(self.blocks_cache_file(), self.initial_height)
            .await?;

        TestData::new(SHARED_FIXTURE, proof, blocks).write(&self.output)?;
        info!(target: "fixture_gen", "Wrote test data to {}", self.output.display());

        Ok(())
    }
}

/// Initializes the tracing subscriber
///
/// # Arguments
/// * `verbosity_level` - The verbosity level (0-4)
///
/// # Returns
/// * `Result<()>` - Ok if successful, Err otherwise.
pub(crate) fn init_tracing_subscriber(verbosity_level: u8) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(match verbosity_level {
            0 => Level::ERROR,
            1 => Level::WARN,
            2 => Level::INFO,
            3 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber).map_err(|e| anyhow!(e))
}

/// Styles for the CLI application.
const fn cli_styles() -> clap::builder::Styles {
    clap::builder::Styles::styled()
        .usage(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
        .header(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .valid(Style::new().bold().underline().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}
