use serde::{Deserialize, Serialize};

use crate::model::vo::CfgParam;

/// A complete job request, section by section as CRAB3 expects it.
///
/// Built fresh for every task by
/// [`SubmissionTemplate::render`](crate::model::vo::SubmissionTemplate::render), never shared
/// between two submissions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionConfig {
    pub general: General,
    pub job_type: JobType,
    pub data: Data,
    pub site: Site,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct General {
    pub request_name: String,
    pub work_area: String,
    pub transfer_outputs: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobType {
    pub plugin_name: String,
    /// CMSSW parameter-set file
    pub pset_name: String,
    pub output_files: Vec<String>,
    pub input_files: Vec<String>,
    pub py_cfg_params: Vec<CfgParam>,
    pub allow_undistributed_cmssw: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Data {
    pub input_dataset: String,
    pub splitting: Splitting,
    pub units_per_job: u64,
    pub publication: bool,
    /// LFN base of the output storage path
    pub out_lfn_dir_base: String,
    pub ignore_locality: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Site {
    pub storage_site: String,
    pub whitelist: Vec<String>,
    pub blacklist: Vec<String>,
}

/// Data splitting algorithm
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
pub enum Splitting {
    Automatic,
    FileBased,
    LumiBased,
    #[default]
    EventAwareLumiBased,
    EventBased,
}

impl SubmissionConfig {
    /// Rendered `pyCfgParams` list
    pub fn cfg_params(&self) -> Vec<String> {
        self.job_type.py_cfg_params.iter().map(ToString::to_string).collect()
    }

    /// Directory CRAB creates for this request inside the work area
    pub fn project_dir(&self) -> String {
        format!("{}/crab_{}", self.general.work_area, self.general.request_name)
    }
}
