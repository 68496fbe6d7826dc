use crate::model::{entity::TaskEntry, vo::HttpFailure};

/// Operator-facing output of a batch run
#[async_trait::async_trait]
pub trait SubmissionReporter {
    /// Announce a task right before it is submitted
    async fn announce(&self, task: &TaskEntry) -> anyhow::Result<()>;

    /// Dump what the server answered when it rejected a submission
    async fn report_rejection(&self, task: &TaskEntry, failure: &HttpFailure)
        -> anyhow::Result<()>;
}
