mod boilerplate;
mod container;

use anyhow::Context;
use domain::service::TaskCatalog;

use crate::{
    catalog::{BuiltinCatalog, FileCatalog},
    config::BatchConfig,
    infrastructure::{
        command::SshConfig,
        service::{
            console_reporter::ConsoleReporter,
            crab::{models::OutputParser, CrabClient},
        },
    },
};

pub use self::container::Container;

impl Container {
    pub fn new(config: &BatchConfig) -> anyhow::Result<Self> {
        let catalog: Box<dyn TaskCatalog + Send + Sync> = match &config.catalog.path {
            Some(path) => {
                tracing::info!(%path, "Reading tasks from file");
                Box::new(FileCatalog::new(path))
            }
            None => Box::new(BuiltinCatalog),
        };

        let submitter = CrabClient::builder()
            .program(config.crab.command.clone())
            .mode(config.crab.mode)
            .save_path(config.crab.save_path.clone())
            .ssh(config.crab.ssh_proxy.as_ref().map(SshConfig::new))
            .output(OutputParser::new().context("Cannot compile crab output patterns")?)
            .build();

        let container = Container::builder()
            .catalog(catalog)
            .submitter(submitter)
            .reporter(ConsoleReporter::stdout())
            .build();

        Ok(container)
    }
}
