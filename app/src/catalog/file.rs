use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use config::{Config, Source};
use domain::{model::entity::TaskEntry, service::TaskCatalog};
use serde::Deserialize;

/// Task list kept next to the configuration instead of in the binary.
///
/// Any format the `config` crate understands works, e.g.
///
/// ```yaml
/// tasks:
///   - name: TT
///     dataset: /TT_TuneCUETP8M2T4_13TeV-powheg-pythia8/.../MINIAODSIM
///   - name: TTH_M-125
///     dataset: /ttHJetToTT_M125_13TeV_amcatnloFXFX_madspin_pythia8/.../MINIAODSIM
///     enabled: false
/// ```
pub struct FileCatalog {
    path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tasks: Vec<TaskEntry>,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load<S>(source: S) -> anyhow::Result<Vec<TaskEntry>>
    where
        S: Source + Send + Sync + 'static,
    {
        let file: CatalogFile = Config::builder().add_source(source).build()?.try_deserialize()?;
        Ok(file.tasks.into_iter().filter(|t| t.enabled).collect())
    }
}

#[async_trait]
impl TaskCatalog for FileCatalog {
    async fn enabled_tasks(&self) -> anyhow::Result<Vec<TaskEntry>> {
        tracing::debug!(path = %self.path.display(), "Loading task catalog");
        Self::load(config::File::from(self.path.as_path()))
            .with_context(|| format!("Unable to read task catalog {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use config::{File, FileFormat};
    use indoc::indoc;

    use super::*;

    #[test]
    fn yaml_catalog() {
        let s = indoc! {r#"
            tasks:
              - name: A
                dataset: /dsA
              - name: Disabled
                dataset: /off
                enabled: false
              - name: B
                dataset: /dsB
        "#};
        let tasks = FileCatalog::load(File::from_str(s, FileFormat::Yaml)).unwrap();
        assert_eq!(tasks, [TaskEntry::new("A", "/dsA"), TaskEntry::new("B", "/dsB")]);
    }

    #[test]
    fn json_catalog_keeps_case() {
        let s = r#"{"tasks": [
            {"name": "GluGluToHToTauTau_M-125", "dataset": "/GluGluHToTauTau_M125/X/MINIAODSIM"}
        ]}"#;
        let tasks = FileCatalog::load(File::from_str(s, FileFormat::Json)).unwrap();
        assert_eq!(tasks[0].name, "GluGluToHToTauTau_M-125");
        assert_eq!(tasks[0].dataset, "/GluGluHToTauTau_M125/X/MINIAODSIM");
    }

    #[test]
    fn missing_dataset_is_an_error() {
        let s = indoc! {r#"
            tasks:
              - name: A
        "#};
        assert!(FileCatalog::load(File::from_str(s, FileFormat::Yaml)).is_err());
    }

    #[tokio::test]
    async fn missing_file() {
        let err = FileCatalog::new("/nonexistent/catalog.yaml").enabled_tasks().await.unwrap_err();
        assert!(err.to_string().contains("/nonexistent/catalog.yaml"));
    }
}
