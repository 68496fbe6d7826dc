use serde::Deserialize;

use super::{CfgParam, FlagRule};
use crate::model::entity::{
    Data, General, JobType, Site, Splitting, SubmissionConfig, TaskEntry,
};

/// Everything a submission carries except what varies per task.
///
/// Holds no request name, dataset or parameter list, so a rendered
/// configuration can only get those from the task it is rendered for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SubmissionTemplate {
    pub work_area: String,
    pub transfer_outputs: bool,

    pub plugin_name: String,
    pub pset_name: String,
    pub output_files: Vec<String>,
    pub input_files: Vec<String>,
    pub allow_undistributed_cmssw: bool,
    /// Parameters shared by every task, flags are appended after these
    pub base_params: Vec<CfgParam>,

    pub splitting: Splitting,
    pub units_per_job: u64,
    pub publication: bool,
    pub out_lfn_dir_base: String,
    pub ignore_locality: bool,

    pub site: Site,
}

impl Default for SubmissionTemplate {
    fn default() -> Self {
        Self {
            work_area: "Apr05_MC_80X".to_owned(),
            transfer_outputs: true,
            plugin_name: "Analysis".to_owned(),
            pset_name: "higgstautau_cfg_80X_Mar17.py".to_owned(),
            output_files: vec!["EventTree.root".to_owned()],
            input_files: vec![],
            allow_undistributed_cmssw: true,
            base_params: vec![
                CfgParam::new("release", "80XMINIAOD"),
                CfgParam::new("isData", "0"),
                CfgParam::new("doHT", "0"),
                CfgParam::new("globalTag", "80X_mcRun2_asymptotic_2016_TrancheIV_v8"),
                CfgParam::new("isReHLT", "1"),
            ],
            splitting: Splitting::EventAwareLumiBased,
            units_per_job: 100_000,
            publication: false,
            out_lfn_dir_base: "/store/user/dwinterb/Apr05_MC_80X/".to_owned(),
            ignore_locality: false,
            site: Site {
                storage_site: "T2_UK_London_IC".to_owned(),
                ..Default::default()
            },
        }
    }
}

impl SubmissionTemplate {
    /// Build the configuration for one task: base parameters first, then one
    /// flag per rule, in rule order.
    pub fn render(&self, task: &TaskEntry, rules: &[FlagRule]) -> SubmissionConfig {
        let py_cfg_params = self
            .base_params
            .iter()
            .cloned()
            .chain(rules.iter().map(|rule| rule.param_for(task)))
            .collect();

        SubmissionConfig {
            general: General {
                request_name: task.name.clone(),
                work_area: self.work_area.clone(),
                transfer_outputs: self.transfer_outputs,
            },
            job_type: JobType {
                plugin_name: self.plugin_name.clone(),
                pset_name: self.pset_name.clone(),
                output_files: self.output_files.clone(),
                input_files: self.input_files.clone(),
                py_cfg_params,
                allow_undistributed_cmssw: self.allow_undistributed_cmssw,
            },
            data: Data {
                input_dataset: task.dataset.clone(),
                splitting: self.splitting,
                units_per_job: self.units_per_job,
                publication: self.publication,
                out_lfn_dir_base: self.out_lfn_dir_base.clone(),
                ignore_locality: self.ignore_locality,
            },
            site: self.site.clone(),
        }
    }
}
