//! Main entrypoint for the fixture generator.

#![warn(missing_debug_implementations, missing_docs, unreachable_pub, rustdoc::all)]
#![deny(unused_must_use, rust_2018_idioms)]

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod cli;
use cli::{init_tracing_subscriber, FixtureGenCli};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> Result<()> {
    let cfg = FixtureGenCli::parse();
    init_tracing_subscriber(cfg.v)?;

    cfg.run().await?;

    info!(target: "fixture_gen", "Exiting fixture generator.");
    Ok(())
}
