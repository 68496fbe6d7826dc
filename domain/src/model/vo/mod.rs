pub mod cfg_param;
pub mod flag_rule;
pub mod submission;
pub mod template;

#[rustfmt::skip]
pub use self::{
    cfg_param::CfgParam,
    flag_rule::FlagRule,
    submission::{HttpFailure, SubmitReceipt},
    template::SubmissionTemplate,
};
