pub mod batch;

pub mod prelude {
    #[rustfmt::skip]
    pub use super::batch::{BatchSubmitService, BatchSubmitState, BatchSummary, TaskOutcome};
}
