//! bandbatch CLI entry point.
//!
//! Usage:
//!   bandbatch run.yml --batch-config batch.yml            # one job
//!   bandbatch run.yml --batch-config batch.yml -n 8       # eight bands
//!   bandbatch run.yml --batch-config batch.yml \
//!       -b '0:0~1023,0:1024~2048'                         # explicit bands

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod args;

use args::Cli;
use bandbatch_kernel::config::{BatchConfig, ObsInfo};
use bandbatch_kernel::dispatch::{JobDispatcher, PipelineIdentity};
use bandbatch_kernel::partition::partition;
use bandbatch_kernel::scheduler::SlurmClient;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let identity = PipelineIdentity::load_from(&cli.config)?;

    let obs_info_path = cli
        .obs_info
        .clone()
        .unwrap_or_else(|| identity.output_dir.join("obsinfo.json"));
    let obs_info = ObsInfo::load_from(&obs_info_path)?;
    let total_channels = obs_info
        .channel_count(cli.obs, cli.spw as usize)
        .with_context(|| {
            format!(
                "no channel count recorded for observation {} sub-band {}",
                cli.obs, cli.spw
            )
        })?;

    let spec = cli.band_spec()?;
    let parts = partition(total_channels, cli.spw, &spec, &[])?;
    info!(
        nbands = parts.nbands(),
        total_channels, "channel range partitioned"
    );

    let batch = BatchConfig::load_from(&cli.batch_config)?;
    let client = Arc::new(SlurmClient::new(batch.directives()));
    let invocation = batch.base_invocation(cli.forwarded_tokens());

    let mut dispatcher = JobDispatcher::new(identity, invocation, parts, client);
    let handles = dispatcher.submit().await?;
    info!(submitted = handles.len(), "all band jobs submitted");

    Ok(())
}
