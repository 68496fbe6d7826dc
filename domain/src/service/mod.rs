mod job_submitter;
mod submission_reporter;
mod task_catalog;

#[rustfmt::skip]
pub use self::{
    job_submitter::{JobSubmitter, SubmitError},
    submission_reporter::SubmissionReporter,
    task_catalog::TaskCatalog,
};
