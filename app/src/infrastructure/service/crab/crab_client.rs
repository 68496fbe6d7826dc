use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use domain::{
    model::{entity::SubmissionConfig, vo::SubmitReceipt},
    service::{JobSubmitter, SubmitError},
};
use tokio::process::Command;
use typed_builder::TypedBuilder;

use super::{config_file, models::OutputParser};
use crate::config::SubmitMode;
use crate::infrastructure::command::{shell_quote, MaybeSsh, Scp, SshConfig};

/// Submits through the `crab` command line client, one child process per
/// submission.
#[derive(TypedBuilder)]
pub struct CrabClient {
    #[builder(default = "crab".to_owned(), setter(into))]
    program: String,

    #[builder(default)]
    mode: SubmitMode,

    /// Local directory the configuration files are written under
    #[builder(default = ".".to_owned(), setter(into))]
    save_path: String,

    #[builder(default)]
    ssh: Option<SshConfig>,

    output: OutputParser,
}

impl AsRef<Option<SshConfig>> for CrabClient {
    fn as_ref(&self) -> &Option<SshConfig> {
        &self.ssh
    }
}

#[async_trait]
impl JobSubmitter for CrabClient {
    async fn submit(&self, config: SubmissionConfig) -> Result<SubmitReceipt, SubmitError> {
        let relative = Self::config_path(&config);
        let local = Path::new(&self.save_path).join(&relative);
        self.write_config(&local, &config).await?;

        if self.mode == SubmitMode::WriteOnly {
            tracing::info!(path = %local.display(), "Configuration written, not submitting");
            return Ok(SubmitReceipt {
                task_name: None,
                project_dir: Some(config.project_dir()),
            });
        }

        if let Some(ssh) = self.ssh() {
            self.upload(&local, &ssh.remote_path(&relative)).await?;
        }

        let mut command = self.submit_command(&relative);
        tracing::debug!(command = ?command.as_std(), "Running crab");
        let out = command.output().await.map_err(SubmitError::Spawn)?;
        let stdout = String::from_utf8_lossy(&out.stdout);
        let stderr = String::from_utf8_lossy(&out.stderr);
        tracing::debug!(status = %out.status, %stdout, %stderr, "crab finished");

        self.output.classify(out.status.success(), &stdout, &stderr)
    }
}

impl CrabClient {
    /// `<work_area>/configs/crab_<request_name>.py`
    fn config_path(config: &SubmissionConfig) -> PathBuf {
        Path::new(&config.general.work_area)
            .join("configs")
            .join(format!("crab_{}.py", config.general.request_name))
    }

    /// `crab submit` for a configuration at `relative`. On the proxy every
    /// argument goes through the remote shell and is quoted.
    fn submit_command(&self, relative: &Path) -> Command {
        let mut command = match self.ssh() {
            Some(ssh) => {
                let mut command = self.command("cd");
                command
                    .arg(shell_quote(&ssh.base_dir))
                    .arg("&&")
                    .arg(shell_quote(&self.program))
                    .args(["submit", "--config"])
                    .arg(shell_quote(&ssh.remote_path(relative)));
                command
            }
            None => {
                let mut command = self.command(&self.program);
                command.args(["submit", "--config"]).arg(relative);
                command.current_dir(&self.save_path);
                command
            }
        };
        if self.mode == SubmitMode::DryRun {
            command.arg("--dryrun");
        }
        command
    }

    async fn write_config(&self, path: &Path, config: &SubmissionConfig) -> anyhow::Result<()> {
        let dir = path.parent().context("Configuration path has no parent")?;
        tokio::fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Unable to create {}", dir.display()))?;
        tokio::fs::write(path, config_file::render(config))
            .await
            .with_context(|| format!("Unable to write {}", path.display()))
    }

    async fn upload(&self, local: &Path, remote: &str) -> anyhow::Result<()> {
        let remote_dir = Path::new(remote)
            .parent()
            .context("Remote configuration path has no parent")?
            .to_string_lossy()
            .into_owned();
        let out = self
            .command("mkdir")
            .arg("-p")
            .arg(shell_quote(&remote_dir))
            .output()
            .await?;
        if !out.status.success() {
            anyhow::bail!(
                "Unable to create directory {remote_dir} on the proxy. real: {}, err: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr)
            )
        }

        let Some(mut scp) = self.scp(local, remote) else {
            return Ok(());
        };
        let out = scp.output().await?;
        if !out.status.success() {
            anyhow::bail!(
                "Exit Status not 0 for scp. real: {}, err: {}",
                out.status,
                String::from_utf8_lossy(&out.stderr)
            )
        }
        Ok(())
    }
}
