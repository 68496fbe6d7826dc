use std::io::Stdout;

use domain::service::TaskCatalog;
use typed_builder::TypedBuilder;

use crate::infrastructure::service::{console_reporter::ConsoleReporter, crab::CrabClient};

#[derive(TypedBuilder)]
pub struct Container {
    pub(super) catalog: Box<dyn TaskCatalog + Send + Sync>,

    pub(super) submitter: CrabClient,

    pub(super) reporter: ConsoleReporter<Stdout>,
}
