use std::path::Path;

use tokio::process::Command;

use crate::config::SshProxyConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshConfig {
    pub port: String,
    /// `user@host`
    pub destination: String,
    /// Remote directory the submissions run from, may start with `~`
    pub base_dir: String,
}

/// Runs commands on the ssh proxy when one is configured, locally otherwise.
pub trait MaybeSsh {
    fn command(&self, program: &str) -> Command;
    fn ssh(&self) -> Option<&SshConfig>;
}

impl<Ctx> MaybeSsh for Ctx
where
    Ctx: AsRef<Option<SshConfig>>,
{
    fn command(&self, program: &str) -> Command {
        let Some(ssh) = self.as_ref() else {
            return Command::new(program);
        };

        let mut command = Command::new("ssh");
        command.args(["-p", &ssh.port, &ssh.destination, program]);
        command
    }

    fn ssh(&self) -> Option<&SshConfig> {
        self.as_ref().as_ref()
    }
}

impl SshConfig {
    pub fn new(config: &SshProxyConfig) -> Self {
        let SshProxyConfig {
            host,
            username,
            port,
            home_dir,
            save_dir,
        } = config;

        Self {
            port: port.to_string(),
            destination: format!("{username}@{host}"),
            base_dir: format!("{}/{}", home_dir.trim_end_matches('/'), save_dir),
        }
    }

    /// Remote location of a path relative to `base_dir`
    pub fn remote_path(&self, relative: &Path) -> String {
        format!("{}/{}", self.base_dir, relative.to_string_lossy())
    }
}

/// Quote `arg` for the remote shell. A leading `~` or `~/` stays outside the
/// quotes so it still expands to the home directory.
pub fn shell_quote(arg: &str) -> String {
    if arg == "~" {
        return arg.to_owned();
    }
    let (home, rest) = match arg.strip_prefix("~/") {
        Some(rest) => ("~/", rest),
        None => ("", arg),
    };
    let plain = |c: char| c.is_ascii_alphanumeric() || "-_./=:@%+,".contains(c);
    if !rest.is_empty() && rest.chars().all(plain) {
        return format!("{home}{rest}");
    }
    format!("{home}'{}'", rest.replace('\'', r"'\''"))
}
