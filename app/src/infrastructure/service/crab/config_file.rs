use domain::model::entity::SubmissionConfig;
use indoc::formatdoc;

/// Render a submission as a CRAB3 python configuration file.
pub fn render(config: &SubmissionConfig) -> String {
    let SubmissionConfig {
        general,
        job_type,
        data,
        site,
    } = config;

    let mut job_type_extra = String::new();
    if !job_type.input_files.is_empty() {
        job_type_extra += &format!(
            "config.JobType.inputFiles = {}\n",
            py_list(&job_type.input_files)
        );
    }

    let mut data_extra = String::new();
    if data.ignore_locality {
        data_extra += "config.Data.ignoreLocality = True\n";
    }

    let mut site_extra = String::new();
    if !site.whitelist.is_empty() {
        site_extra += &format!("config.Site.whitelist = {}\n", py_list(&site.whitelist));
    }
    if !site.blacklist.is_empty() {
        site_extra += &format!("config.Site.blacklist = {}\n", py_list(&site.blacklist));
    }

    formatdoc! {r#"
        from WMCore.Configuration import Configuration
        config = Configuration()

        config.section_('General')
        config.General.requestName = {request_name}
        config.General.workArea = {work_area}
        config.General.transferOutputs = {transfer_outputs}

        config.section_('JobType')
        config.JobType.pluginName = {plugin_name}
        config.JobType.psetName = {pset_name}
        config.JobType.outputFiles = {output_files}
        config.JobType.pyCfgParams = {py_cfg_params}
        config.JobType.allowUndistributedCMSSW = {allow_undistributed}
        {job_type_extra}
        config.section_('Data')
        config.Data.inputDataset = {input_dataset}
        config.Data.splitting = {splitting}
        config.Data.unitsPerJob = {units_per_job}
        config.Data.publication = {publication}
        config.Data.outLFNDirBase = {out_lfn_dir_base}
        {data_extra}
        config.section_('User')

        config.section_('Site')
        config.Site.storageSite = {storage_site}
        {site_extra}"#,
        request_name = py_str(&general.request_name),
        work_area = py_str(&general.work_area),
        transfer_outputs = py_bool(general.transfer_outputs),
        plugin_name = py_str(&job_type.plugin_name),
        pset_name = py_str(&job_type.pset_name),
        output_files = py_list(&job_type.output_files),
        py_cfg_params = py_list(&config.cfg_params()),
        allow_undistributed = py_bool(job_type.allow_undistributed_cmssw),
        input_dataset = py_str(&data.input_dataset),
        splitting = py_str(&data.splitting.to_string()),
        units_per_job = data.units_per_job,
        publication = py_bool(data.publication),
        out_lfn_dir_base = py_str(&data.out_lfn_dir_base),
        storage_site = py_str(&site.storage_site),
    }
}

fn py_str(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str(r"\\"),
            '\'' => out.push_str(r"\'"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn py_list(items: &[String]) -> String {
    let items: Vec<String> = items.iter().map(|s| py_str(s)).collect();
    format!("[{}]", items.join(", "))
}

fn py_bool(b: bool) -> &'static str {
    if b {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use domain::model::{
        entity::TaskEntry,
        vo::{FlagRule, SubmissionTemplate},
    };
    use indoc::indoc;

    use super::*;

    fn config(name: &str, dataset: &str) -> SubmissionConfig {
        SubmissionTemplate::default()
            .render(&TaskEntry::new(name, dataset), &[FlagRule::lhe_weights()])
    }

    #[test]
    fn default_campaign() {
        let rendered = render(&config(
            "VBFHToTauTau_M-125",
            "/VBFHToTauTau_M125_13TeV_powheg_pythia8/RunIISummer16MiniAODv2-PUMoriond17_80X_mcRun2_asymptotic_2016_TrancheIV_v6-v1/MINIAODSIM",
        ));
        let expected = indoc! {r#"
            from WMCore.Configuration import Configuration
            config = Configuration()

            config.section_('General')
            config.General.requestName = 'VBFHToTauTau_M-125'
            config.General.workArea = 'Apr05_MC_80X'
            config.General.transferOutputs = True

            config.section_('JobType')
            config.JobType.pluginName = 'Analysis'
            config.JobType.psetName = 'higgstautau_cfg_80X_Mar17.py'
            config.JobType.outputFiles = ['EventTree.root']
            config.JobType.pyCfgParams = ['release=80XMINIAOD', 'isData=0', 'doHT=0', 'globalTag=80X_mcRun2_asymptotic_2016_TrancheIV_v8', 'isReHLT=1', 'LHEWeights=True']
            config.JobType.allowUndistributedCMSSW = True

            config.section_('Data')
            config.Data.inputDataset = '/VBFHToTauTau_M125_13TeV_powheg_pythia8/RunIISummer16MiniAODv2-PUMoriond17_80X_mcRun2_asymptotic_2016_TrancheIV_v6-v1/MINIAODSIM'
            config.Data.splitting = 'EventAwareLumiBased'
            config.Data.unitsPerJob = 100000
            config.Data.publication = False
            config.Data.outLFNDirBase = '/store/user/dwinterb/Apr05_MC_80X/'

            config.section_('User')

            config.section_('Site')
            config.Site.storageSite = 'T2_UK_London_IC'
        "#};
        assert_eq!(rendered, expected);
    }

    #[test]
    fn optional_fields() {
        let mut config = config("TT", "/TT");
        config.job_type.input_files = vec!["Spring16_25nsV3_MC.db".to_owned()];
        config.data.ignore_locality = true;
        config.site.whitelist = vec!["T2_UK_London_IC".to_owned(), "T2_CH_CERN".to_owned()];
        config.site.blacklist = vec!["T2_US_*".to_owned()];

        let rendered = render(&config);
        assert!(rendered.contains("config.JobType.inputFiles = ['Spring16_25nsV3_MC.db']\n"));
        assert!(rendered.contains("config.Data.ignoreLocality = True\n"));
        assert!(rendered.contains("config.Site.whitelist = ['T2_UK_London_IC', 'T2_CH_CERN']\n"));
        assert!(rendered.ends_with("config.Site.blacklist = ['T2_US_*']\n"));
    }

    #[test]
    fn quoting() {
        assert_eq!(py_str("it's"), r"'it\'s'");
        assert_eq!(py_str(r"a\b"), r"'a\\b'");
        assert_eq!(py_list(&[]), "[]");
    }
}
