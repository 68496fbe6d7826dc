use crate::model::{
    entity::SubmissionConfig,
    vo::{HttpFailure, SubmitReceipt},
};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// The server rejected the request
    #[error("Submission rejected: {0}")]
    Http(HttpFailure),
    /// The submission process could not be started at all
    #[error("Unable to start submission: {0}")]
    Spawn(#[source] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait::async_trait]
pub trait JobSubmitter {
    async fn submit(&self, config: SubmissionConfig) -> Result<SubmitReceipt, SubmitError>;
}
