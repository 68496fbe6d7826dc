use domain::model::vo::{FlagRule, SubmissionTemplate};
use serde::*;

const CONFIG_NAME: &str = "crab-batch";
const ENV_PREFIX: &str = "CRAB_BATCH";
const CONFIG_PATH_VAR: &str = "CRAB_BATCH_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "Default::default")]
    pub log: LogConfig,

    #[serde(default = "Default::default")]
    pub catalog: CatalogConfig,

    #[serde(default = "Default::default")]
    pub template: SubmissionTemplate,

    #[serde(default = "BatchConfig::default_flag_rules")]
    pub flag_rules: Vec<FlagRule>,

    #[serde(default = "Default::default")]
    pub crab: CrabConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, `RUST_LOG` takes precedence
    #[serde(default = "LogConfig::default_level")]
    pub level: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Task list file, the built-in list is used when unset
    #[serde(default = "Default::default")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CrabConfig {
    #[serde(default = "CrabConfig::default_command")]
    pub command: String,

    #[serde(default = "Default::default")]
    pub mode: SubmitMode,

    /// Where generated configurations and CRAB work areas live
    #[serde(default = "CrabConfig::default_save_path")]
    pub save_path: String,

    #[serde(default = "Default::default")]
    pub ssh_proxy: Option<SshProxyConfig>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    #[default]
    Submit,
    /// `crab submit --dryrun`
    DryRun,
    /// Only write the configuration files
    WriteOnly,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SshProxyConfig {
    pub host: String,

    pub username: String,

    #[serde(default = "SshProxyConfig::default_port")]
    pub port: u16,

    #[serde(default = "SshProxyConfig::default_home_dir")]
    pub home_dir: String,

    #[serde(default = "SshProxyConfig::default_save_dir")]
    pub save_dir: String,
}

/// Layers, later ones win: `crab-batch.{yaml,toml,json}` in the working
/// directory, the file named by `CRAB_BATCH_CONFIG`, `CRAB_BATCH__*` variables.
pub fn build_config() -> anyhow::Result<config::Config> {
    let mut builder = config::Config::builder()
        .add_source(config::File::with_name(CONFIG_NAME).required(false));
    if let Ok(path) = std::env::var(CONFIG_PATH_VAR) {
        builder = builder.add_source(config::File::with_name(&path));
    }
    let config = builder
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;
    Ok(config)
}

impl BatchConfig {
    pub fn default_flag_rules() -> Vec<FlagRule> {
        vec![FlagRule::lhe_weights()]
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}

impl LogConfig {
    pub fn default_level() -> String {
        "info".to_owned()
    }
}

impl Default for CrabConfig {
    fn default() -> Self {
        Self {
            command: Self::default_command(),
            mode: SubmitMode::default(),
            save_path: Self::default_save_path(),
            ssh_proxy: None,
        }
    }
}

impl CrabConfig {
    pub fn default_command() -> String {
        "crab".to_owned()
    }

    pub fn default_save_path() -> String {
        ".".to_owned()
    }
}

impl SshProxyConfig {
    pub fn default_port() -> u16 {
        22
    }

    pub fn default_home_dir() -> String {
        "~".to_owned()
    }

    pub fn default_save_dir() -> String {
        "crab-batch".to_owned()
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};
    use domain::model::{entity::Splitting, vo::CfgParam};
    use indoc::indoc;

    use super::*;

    fn parse(s: &str) -> BatchConfig {
        Config::builder()
            .add_source(File::from_str(s, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn empty_config_reproduces_defaults() {
        let config = parse("{}");
        assert_eq!(config.log.level, "info");
        assert!(config.catalog.path.is_none());
        assert_eq!(config.template, SubmissionTemplate::default());
        assert_eq!(config.flag_rules, [FlagRule::lhe_weights()]);
        assert_eq!(config.crab.command, "crab");
        assert_eq!(config.crab.mode, SubmitMode::Submit);
        assert!(config.crab.ssh_proxy.is_none());
    }

    #[test]
    fn full_config() {
        let config = parse(indoc! {r#"
            log:
              level: debug
            catalog:
              path: samples/summer16.yaml
            template:
              work_area: Jun01_MC_80X
              splitting: FileBased
              units_per_job: 5
              base_params: ["release=80XMINIAOD", "isData=1"]
              site:
                storage_site: T2_CH_CERN
                blacklist: ["T2_US_*"]
            flag_rules:
              - param: LHEWeights
                name_contains: ["VBFHToTauTau_M-125"]
            crab:
              mode: dry_run
              ssh_proxy:
                host: lxplus.cern.ch
                username: someone
        "#});

        assert_eq!(config.log.level, "debug");
        assert_eq!(config.catalog.path.as_deref(), Some("samples/summer16.yaml"));
        assert_eq!(config.template.work_area, "Jun01_MC_80X");
        assert_eq!(config.template.splitting, Splitting::FileBased);
        assert_eq!(config.template.units_per_job, 5);
        assert_eq!(config.template.base_params[1], CfgParam::new("isData", "1"));
        assert_eq!(config.template.site.storage_site, "T2_CH_CERN");
        assert_eq!(config.template.site.blacklist, ["T2_US_*"]);
        assert_eq!(config.template.pset_name, "higgstautau_cfg_80X_Mar17.py");
        assert_eq!(config.flag_rules[0].name_contains, ["VBFHToTauTau_M-125"]);
        assert_eq!(config.crab.mode, SubmitMode::DryRun);

        let ssh = config.crab.ssh_proxy.unwrap();
        assert_eq!(ssh.host, "lxplus.cern.ch");
        assert_eq!(ssh.port, 22);
        assert_eq!(ssh.home_dir, "~");
        assert_eq!(ssh.save_dir, "crab-batch");
    }

    #[test]
    fn no_flag_rules() {
        let config = parse("flag_rules: []");
        assert!(config.flag_rules.is_empty());
    }
}
