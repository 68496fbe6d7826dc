pub mod submission;
pub mod task;

#[rustfmt::skip]
pub use self::{
    submission::{Data, General, JobType, Site, Splitting, SubmissionConfig},
    task::{TaskEntry, TaskState},
};
