mod catalog;
mod config;
mod infrastructure;
mod telemetry;

use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;
use service::prelude::*;

use self::config::{build_config, BatchConfig};
use self::infrastructure::ioc::Container;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = build_config().with_context(|| "Failed to build config".red())?;
    let batch_config: BatchConfig = config
        .try_deserialize()
        .with_context(|| "Invalid configuration".red())?;

    telemetry::init_telemetry(&batch_config.log)
        .with_context(|| "Failed to initialize logger".red())?;

    let container = Arc::new(
        Container::new(&batch_config).with_context(|| "Cannot build IOC container".red())?,
    );
    let service = BatchSubmitService::new(
        BatchSubmitState::new(batch_config.template, batch_config.flag_rules),
        container,
    );

    let summary = service.run().await.with_context(|| "Batch aborted".red())?;
    tracing::info!(
        submitted = summary.submitted(),
        rejected = summary.rejected(),
        failed = summary.failed(),
        "Batch finished"
    );
    Ok(())
}
