use domain::{
    model::{
        entity::{SubmissionConfig, TaskEntry},
        vo::{HttpFailure, SubmitReceipt},
    },
    service::{JobSubmitter, SubmissionReporter, SubmitError, TaskCatalog},
};

use super::Container;

#[async_trait::async_trait]
impl TaskCatalog for Container {
    async fn enabled_tasks(&self) -> anyhow::Result<Vec<TaskEntry>> {
        self.catalog.enabled_tasks().await
    }
}

#[async_trait::async_trait]
impl JobSubmitter for Container {
    async fn submit(&self, config: SubmissionConfig) -> Result<SubmitReceipt, SubmitError> {
        self.submitter.submit(config).await
    }
}

#[async_trait::async_trait]
impl SubmissionReporter for Container {
    async fn announce(&self, task: &TaskEntry) -> anyhow::Result<()> {
        self.reporter.announce(task).await
    }

    async fn report_rejection(
        &self,
        task: &TaskEntry,
        failure: &HttpFailure,
    ) -> anyhow::Result<()> {
        self.reporter.report_rejection(task, failure).await
    }
}
